//! Hierarchical document model for DWML responses
//!
//! The extractor works on a small owned element tree rather than on raw XML
//! events, so a document can be fetched and parsed by one collaborator and
//! handed to the pipeline already built. Paths are slash-separated child tag
//! names relative to an element, e.g. `data/time-layout`.

use crate::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

/// One element of a parsed document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Qualified tag name as written, e.g. `start-valid-time`
    pub name: String,

    /// Attributes in document order, qualified names as written
    pub attributes: Vec<(String, String)>,

    /// Direct text content, trimmed
    pub text: String,

    /// Child elements in document order
    pub children: Vec<Element>,
}

impl Element {
    /// Create an element with no attributes, text or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Parse an XML document into its root element
    pub fn parse_str(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut open: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => open.push(Self::from_start(&start)?),
                Event::Empty(start) => {
                    let element = Self::from_start(&start)?;
                    Self::attach(&mut open, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = open.pop().ok_or_else(|| {
                        Error::document_format("closing tag without a matching opening tag")
                    })?;
                    Self::attach(&mut open, &mut root, element)?;
                }
                Event::Text(text) => {
                    if let Some(current) = open.last_mut() {
                        current.push_text(&text.unescape()?);
                    }
                }
                Event::CData(data) => {
                    if let Some(current) = open.last_mut() {
                        current.push_text(&String::from_utf8_lossy(&data.into_inner()));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(unclosed) = open.last() {
            return Err(Error::document_format(format!(
                "document ended inside <{}>",
                unclosed.name
            )));
        }

        root.ok_or_else(|| Error::document_format("document has no root element"))
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let mut element = Self::new(String::from_utf8_lossy(start.name().as_ref()));
        for attribute in start.attributes() {
            let attribute = attribute.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = attribute.unescape_value()?.into_owned();
            element.attributes.push((key, value));
        }
        Ok(element)
    }

    fn attach(open: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
        match open.last_mut() {
            Some(parent) => parent.children.push(element),
            None if root.is_none() => *root = Some(element),
            None => {
                return Err(Error::document_format(format!(
                    "second root element <{}>",
                    element.name
                )));
            }
        }
        Ok(())
    }

    fn push_text(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(text);
    }

    /// First element matching a slash-separated path of child tags
    pub fn find(&self, path: &str) -> Option<&Element> {
        self.find_all(path).into_iter().next()
    }

    /// Every element matching a slash-separated path of child tags, in
    /// document order
    pub fn find_all(&self, path: &str) -> Vec<&Element> {
        let mut matches = vec![self];
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            matches = matches
                .into_iter()
                .flat_map(|element| element.children.iter())
                .filter(|child| child.name == segment)
                .collect();
        }
        matches
    }

    /// Value of an attribute by its qualified name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Direct text of the element
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text of the element and all of its descendants, one piece per line
    pub fn text_content(&self) -> String {
        let mut pieces: Vec<&str> = Vec::new();
        self.collect_text(&mut pieces);
        pieces.join("\n")
    }

    fn collect_text<'a>(&'a self, pieces: &mut Vec<&'a str>) {
        if !self.text.is_empty() {
            pieces.push(&self.text);
        }
        for child in &self.children {
            child.collect_text(pieces);
        }
    }
}
