//! XML form of user-score autocats.
//!
//! Element names and load defaults match profiles saved by earlier versions:
//! a missing or unparsable node silently takes its default. Text is read
//! verbatim, so prefixes keep their trailing blanks.

use quick_xml::events::Event;
use serde::Serialize;

use crate::error::AutoCatError;
use crate::model::autocat::TYPE_ID;
use crate::model::{AutoCatUserScore, UserScoreRule};

const DEFAULT_MIN_SCORE: i32 = 0;
const DEFAULT_MAX_SCORE: i32 = 100;
const DEFAULT_MIN_REVIEWS: i32 = 0;
const DEFAULT_MAX_REVIEWS: i32 = 0;

#[derive(Serialize)]
#[serde(rename = "AutoCatUserScore")]
struct AutoCatUserScoreXml<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Filter", skip_serializing_if = "Option::is_none")]
    filter: Option<&'a str>,
    #[serde(rename = "Prefix")]
    prefix: &'a str,
    #[serde(rename = "UseWilsonScore")]
    use_wilson_score: bool,
    #[serde(rename = "Rule")]
    rules: &'a [UserScoreRule],
}

impl<'a> From<&'a AutoCatUserScore> for AutoCatUserScoreXml<'a> {
    fn from(autocat: &'a AutoCatUserScore) -> Self {
        Self {
            name: &autocat.name,
            filter: autocat.filter.as_deref(),
            prefix: &autocat.prefix,
            use_wilson_score: autocat.use_wilson_score,
            rules: &autocat.rules,
        }
    }
}

#[derive(Serialize)]
#[serde(rename = "AutoCats")]
struct AutoCatListXml<'a> {
    #[serde(rename = "AutoCatUserScore")]
    autocats: Vec<AutoCatUserScoreXml<'a>>,
}

/// Element tree of a profile document, text kept exactly as written.
#[derive(Debug, Default)]
struct XmlNode {
    name: String,
    text: String,
    children: Vec<XmlNode>,
}

impl XmlNode {
    fn named(name: &[u8]) -> Self {
        Self {
            name: String::from_utf8_lossy(name).into_owned(),
            ..Self::default()
        }
    }

    fn child_text(&self, name: &str) -> Option<&str> {
        self.children
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.text.as_str())
    }

    fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }
}

fn read_error(e: impl std::fmt::Display) -> AutoCatError {
    AutoCatError::ProfileRead(e.to_string())
}

// The serde deserializer trims text, which would eat trailing blanks of prefixes.
fn parse_document(xml: &str) -> Result<XmlNode, AutoCatError> {
    let mut reader = quick_xml::Reader::from_str(xml);
    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        let event = reader.read_event().map_err(read_error)?;
        if root.is_some() {
            match event {
                Event::Eof => break,
                Event::Start(_) | Event::Empty(_) | Event::CData(_) => {
                    return Err(read_error("content after the root element"));
                }
                Event::Text(e) if !e.iter().all(u8::is_ascii_whitespace) => {
                    return Err(read_error("content after the root element"));
                }
                _ => continue,
            }
        }

        let closed = match event {
            Event::Start(e) => {
                stack.push(XmlNode::named(e.name().as_ref()));
                None
            }
            Event::Empty(e) => Some(XmlNode::named(e.name().as_ref())),
            Event::End(_) => Some(
                stack
                    .pop()
                    .ok_or_else(|| read_error("unexpected closing tag"))?,
            ),
            Event::Text(e) => {
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&e.unescape().map_err(read_error)?);
                }
                None
            }
            Event::CData(e) => {
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
                None
            }
            Event::Eof => return Err(read_error("document has no complete root element")),
            _ => None,
        };

        if let Some(node) = closed {
            match stack.last_mut() {
                Some(parent) => parent.children.push(node),
                None => root = Some(node),
            }
        }
    }

    root.ok_or_else(|| read_error("document has no root element"))
}

fn int_or(value: Option<&str>, default: i32) -> i32 {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn bool_or(value: Option<&str>, default: bool) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("true") => true,
        Some("false") => false,
        _ => default,
    }
}

fn rule_from_node(node: &XmlNode) -> UserScoreRule {
    UserScoreRule::new(
        node.child_text("Text").unwrap_or_default(),
        int_or(node.child_text("MinScore"), DEFAULT_MIN_SCORE),
        int_or(node.child_text("MaxScore"), DEFAULT_MAX_SCORE),
        int_or(node.child_text("MinReviews"), DEFAULT_MIN_REVIEWS),
        int_or(node.child_text("MaxReviews"), DEFAULT_MAX_REVIEWS),
    )
}

fn autocat_from_node(node: &XmlNode) -> AutoCatUserScore {
    AutoCatUserScore {
        name: node.child_text("Name").unwrap_or(TYPE_ID).to_string(),
        filter: node.child_text("Filter").map(str::to_string),
        prefix: node.child_text("Prefix").unwrap_or_default().to_string(),
        use_wilson_score: bool_or(node.child_text("UseWilsonScore"), false),
        rules: node.children_named("Rule").map(rule_from_node).collect(),
    }
}

/// Serializes a single autocat as an `AutoCatUserScore` element.
pub fn write_autocat(autocat: &AutoCatUserScore) -> Result<String, AutoCatError> {
    quick_xml::se::to_string(&AutoCatUserScoreXml::from(autocat))
        .map_err(|e| AutoCatError::ProfileWrite(e.to_string()))
}

/// Serializes several autocats inside an `AutoCats` container.
pub fn write_autocats(autocats: &[AutoCatUserScore]) -> Result<String, AutoCatError> {
    let list = AutoCatListXml {
        autocats: autocats.iter().map(AutoCatUserScoreXml::from).collect(),
    };
    quick_xml::se::to_string(&list).map_err(|e| AutoCatError::ProfileWrite(e.to_string()))
}

/// Reads a single `AutoCatUserScore` element. Any other root is an error.
pub fn read_autocat(xml: &str) -> Result<AutoCatUserScore, AutoCatError> {
    let root = parse_document(xml)?;
    if root.name != TYPE_ID {
        return Err(read_error(format!(
            "expected {} root element, found {}",
            TYPE_ID, root.name
        )));
    }
    Ok(autocat_from_node(&root))
}

/// Reads every `AutoCatUserScore` child of a container element. Other autocat
/// kinds in the same container are skipped.
pub fn read_autocats(xml: &str) -> Result<Vec<AutoCatUserScore>, AutoCatError> {
    let root = parse_document(xml)?;
    Ok(root.children_named(TYPE_ID).map(autocat_from_node).collect())
}

/// Reads either a bare `AutoCatUserScore` document or a container of them.
pub fn read_profile(xml: &str) -> Result<Vec<AutoCatUserScore>, AutoCatError> {
    let root = parse_document(xml)?;
    if root.name == TYPE_ID {
        Ok(vec![autocat_from_node(&root)])
    } else {
        Ok(root.children_named(TYPE_ID).map(autocat_from_node).collect())
    }
}
