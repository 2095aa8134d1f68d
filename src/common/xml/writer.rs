//! Forward-only XML tag emitter.
//!
//! A thin layer over [`quick_xml::Writer`] exposing the handful of primitives
//! the part writers need: the declaration, start/end tags, empty tags and
//! simple data elements. Attributes are collected in an [`Attributes`] value
//! that lives on the stack for the duration of a single tag.

use crate::common::error::{Error, Result};
use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::io::Write;

/// 2^53, the first integer an `f64` can no longer step through one by one.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Ordered attribute list for a single tag.
///
/// Most OOXML elements carry one `val` attribute; the widest chart element
/// (`c:pageMargins`) carries six, so the inline capacity covers every tag
/// without touching the heap.
#[derive(Debug, Default, Clone)]
pub struct Attributes<'a> {
    pairs: SmallVec<[(&'a str, Cow<'a, str>); 6]>,
}

impl<'a> Attributes<'a> {
    /// Create an empty attribute list.
    #[inline]
    pub fn new() -> Self {
        Self {
            pairs: SmallVec::new(),
        }
    }

    /// Single `val="..."` attribute, the common case for chart elements.
    #[inline]
    pub fn val(value: &'a str) -> Self {
        Self::new().push_str("val", value)
    }

    /// Single integer `val` attribute.
    #[inline]
    pub fn val_int(value: u32) -> Self {
        Self::new().push_int("val", value)
    }

    /// Append a string attribute.
    #[inline]
    pub fn push_str(mut self, name: &'a str, value: &'a str) -> Self {
        self.pairs.push((name, Cow::Borrowed(value)));
        self
    }

    /// Append an integer attribute.
    #[inline]
    pub fn push_int(mut self, name: &'a str, value: u32) -> Self {
        let mut buffer = itoa::Buffer::new();
        self.pairs
            .push((name, Cow::Owned(buffer.format(value).to_owned())));
        self
    }

    /// Append a floating point attribute in shortest round-trip form.
    ///
    /// Integral values below 2^53 are written without a trailing `.0`; larger
    /// magnitudes keep ryu's exponent form. Non-finite values use the
    /// `xsd:double` spellings `NaN`, `INF` and `-INF`.
    #[inline]
    pub fn push_f64(mut self, name: &'a str, value: f64) -> Self {
        let formatted = if value.is_nan() {
            "NaN".to_owned()
        } else if value.is_infinite() {
            if value > 0.0 { "INF" } else { "-INF" }.to_owned()
        } else if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
            let mut buffer = itoa::Buffer::new();
            buffer.format(value as i64).to_owned()
        } else {
            let mut buffer = ryu::Buffer::new();
            buffer.format_finite(value).to_owned()
        };
        self.pairs.push((name, Cow::Owned(formatted)));
        self
    }

    /// Number of attributes collected so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no attributes have been pushed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn apply(&self, element: &mut BytesStart<'_>) {
        for (name, value) in &self.pairs {
            element.push_attribute((*name, value.as_ref()));
        }
    }
}

/// Sequential XML writer over any [`Write`] sink.
pub struct XmlWriter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> XmlWriter<W> {
    /// Wrap a sink.
    pub fn new(sink: W) -> Self {
        Self {
            writer: Writer::new(sink),
        }
    }

    /// Write `<?xml version="1.0" encoding="UTF-8" standalone="yes"?>` and a newline.
    pub fn declaration(&mut self) -> Result<()> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
            .map_err(|e| Error::Xml(format!("Failed to write XML declaration: {}", e)))?;
        self.writer.get_mut().write_all(b"\n")?;
        Ok(())
    }

    /// Open a tag.
    pub fn start_tag(&mut self, name: &str, attributes: &Attributes<'_>) -> Result<()> {
        let mut element = BytesStart::new(name);
        attributes.apply(&mut element);
        self.writer
            .write_event(Event::Start(element))
            .map_err(|e| Error::Xml(format!("Failed to write <{}>: {}", name, e)))
    }

    /// Open a tag that carries no attributes.
    #[inline]
    pub fn start(&mut self, name: &str) -> Result<()> {
        self.start_tag(name, &Attributes::new())
    }

    /// Close a tag.
    pub fn end_tag(&mut self, name: &str) -> Result<()> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(|e| Error::Xml(format!("Failed to close <{}>: {}", name, e)))
    }

    /// Write a self-closing tag.
    pub fn empty_tag(&mut self, name: &str, attributes: &Attributes<'_>) -> Result<()> {
        let mut element = BytesStart::new(name);
        attributes.apply(&mut element);
        self.writer
            .write_event(Event::Empty(element))
            .map_err(|e| Error::Xml(format!("Failed to write <{}/>: {}", name, e)))
    }

    /// Write a self-closing tag with no attributes.
    #[inline]
    pub fn empty(&mut self, name: &str) -> Result<()> {
        self.empty_tag(name, &Attributes::new())
    }

    /// Write `<name attrs>text</name>`.
    ///
    /// Only `&`, `<` and `>` are escaped in the text; quotes stay literal, so
    /// quoted sheet names such as `'Q1 Data'!$A$1` are written as is.
    pub fn data_element(
        &mut self,
        name: &str,
        text: &str,
        attributes: &Attributes<'_>,
    ) -> Result<()> {
        self.start_tag(name, attributes)?;
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))
            .map_err(|e| Error::Xml(format!("Failed to write text of <{}>: {}", name, e)))?;
        self.end_tag(name)
    }

    /// Borrow the underlying sink.
    #[inline]
    pub fn get_ref(&self) -> &W {
        self.writer.get_ref()
    }

    /// Recover the underlying sink.
    #[inline]
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}
