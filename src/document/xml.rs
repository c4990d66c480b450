use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::str::FromStr;

use super::{AttrMap, Document, Element, Node};
use crate::errors::{Error, Result};

use quick_xml::encoding::Decoder;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event as XmlEvent};
use quick_xml::{Reader, Writer};

/// Markup carried through to the output unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawXmlEvent(XmlEvent<'static>);

fn utf8(bytes: &[u8]) -> Result<String> {
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// General entities declared in a DOCTYPE internal subset, e.g.
/// `<!ENTITY ns_svg "http://www.w3.org/2000/svg">`.
///
/// Parameter entities and external (SYSTEM / PUBLIC) entities are ignored.
fn internal_entities(doctype: &str) -> HashMap<String, String> {
    let mut entities = HashMap::new();
    let mut rest = doctype;
    while let Some(pos) = rest.find("<!ENTITY") {
        rest = rest[pos + "<!ENTITY".len()..].trim_start();
        if rest.starts_with('%') {
            continue;
        }
        let name_end = rest
            .find(|c: char| c.is_ascii_whitespace())
            .unwrap_or(rest.len());
        let (name, tail) = rest.split_at(name_end);
        rest = tail.trim_start();
        let Some(quote) = rest.chars().next().filter(|c| matches!(c, '"' | '\'')) else {
            continue;
        };
        let Some(len) = rest[1..].find(quote) else {
            break;
        };
        entities.insert(name.to_string(), rest[1..1 + len].to_string());
        rest = &rest[len + 2..];
    }
    entities
}

/// Build an `Element` (without children) from a `BytesStart` value. Failures
/// here are low-level XML errors (e.g. bad attribute syntax, non-UTF8).
///
/// Entity references in attribute values are resolved against `entities`
/// as well as the predefined XML entities.
fn element_from_start(
    e: &BytesStart,
    decoder: Decoder,
    entities: &HashMap<String, String>,
) -> Result<Element> {
    let name = utf8(e.name().into_inner())?;
    let attrs = e
        .attributes()
        .map(|a| {
            let aa = a.map_err(|err| Error::Document(format!("attribute error: {err}")))?;
            let key = utf8(aa.key.into_inner())?;
            let value = aa
                .decode_and_unescape_value_with(decoder, |name| {
                    entities
                        .get(name)
                        .map(String::as_str)
                        .or_else(|| resolve_predefined_entity(name))
                })
                .map_err(|err| Error::Document(format!("attribute value error: {err}")))?
                .into_owned();
            Ok((key, value))
        })
        .collect::<Result<AttrMap>>()?;
    Ok(Element::with_attrs(name, attrs))
}

fn start_from_element(el: &Element) -> BytesStart<'_> {
    let mut bs = BytesStart::new(el.name());
    for (k, v) in el.attrs().iter() {
        // (&str, &str) conversion escapes the value
        bs.push_attribute(Attribute::from((k, v)));
    }
    bs
}

/// Where a completed node belongs: inside the innermost open element, or
/// before / after the root element at document level.
fn place(
    node: Node,
    stack: &mut [Element],
    root: Option<&Element>,
    prolog: &mut Vec<Node>,
    epilog: &mut Vec<Node>,
) {
    if let Some(parent) = stack.last_mut() {
        parent.push_child(node);
    } else if root.is_none() {
        prolog.push(node);
    } else {
        epilog.push(node);
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        Self::from_reader(&mut input.as_bytes())
    }
}

impl Document {
    pub fn from_reader(reader: &mut dyn BufRead) -> Result<Self> {
        let mut reader = Reader::from_reader(reader);
        let decoder = reader.decoder();
        let mut entities = HashMap::new();

        let mut buf = Vec::new();
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;
        let mut prolog = Vec::new();
        let mut epilog = Vec::new();

        loop {
            let pos = reader.buffer_position();
            let ev = reader
                .read_event_into(&mut buf)
                .map_err(|e| Error::Document(format!("XML error near byte {pos}: {e}")))?;
            let node = match ev {
                XmlEvent::Eof => break,
                XmlEvent::Decl(_) => None,
                XmlEvent::Start(bs) => {
                    stack.push(element_from_start(&bs, decoder, &entities)?);
                    None
                }
                XmlEvent::End(_) => {
                    let el = stack.pop().ok_or_else(|| {
                        Error::Document(format!("unexpected end tag near byte {pos}"))
                    })?;
                    Some(Node::Element(el))
                }
                XmlEvent::Empty(bs) => {
                    Some(Node::Element(element_from_start(&bs, decoder, &entities)?))
                }
                XmlEvent::DocType(dt) => {
                    entities.extend(internal_entities(&utf8(&dt)?));
                    Some(Node::Other(RawXmlEvent(XmlEvent::DocType(dt.into_owned()))))
                }
                XmlEvent::Text(t) => Some(Node::Text(utf8(&t.into_inner())?)),
                XmlEvent::CData(c) => Some(Node::CData(utf8(&c.into_inner())?)),
                XmlEvent::Comment(c) => Some(Node::Comment(utf8(&c.into_inner())?)),
                other => Some(Node::Other(RawXmlEvent(other.into_owned()))),
            };

            if let Some(node) = node {
                match node {
                    // a completed element with no open parent is the root
                    Node::Element(el) if stack.is_empty() => {
                        if root.is_some() {
                            return Err(Error::Document(format!(
                                "multiple root elements ('{}' near byte {pos})",
                                el.name()
                            )));
                        }
                        root = Some(el);
                    }
                    // whitespace at document level is dropped; layout is regenerated
                    Node::Text(t) if stack.is_empty() && t.trim().is_empty() => {}
                    node => place(node, &mut stack, root.as_ref(), &mut prolog, &mut epilog),
                }
            }
            buf.clear();
        }

        if let Some(unclosed) = stack.last() {
            return Err(Error::Document(format!(
                "unclosed element '{}' at end of input",
                unclosed.name()
            )));
        }
        let root = root.ok_or_else(|| Error::Document("no root element found".into()))?;
        Ok(Self {
            prolog,
            root,
            epilog,
        })
    }

    /// Write the document, preceded by an XML declaration.
    pub fn write_to(&self, writer: &mut dyn Write) -> Result<()> {
        let mut writer = Writer::new(writer);
        let newline = || XmlEvent::Text(BytesText::from_escaped("\n"));

        writer
            .write_event(XmlEvent::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(Error::from_err)?;
        writer.write_event(newline()).map_err(Error::from_err)?;
        for node in &self.prolog {
            write_node(&mut writer, node)?;
            writer.write_event(newline()).map_err(Error::from_err)?;
        }
        write_element(&mut writer, &self.root)?;
        writer.write_event(newline()).map_err(Error::from_err)?;
        for node in &self.epilog {
            write_node(&mut writer, node)?;
            writer.write_event(newline()).map_err(Error::from_err)?;
        }
        Ok(())
    }

    pub fn write_string(&self) -> Result<String> {
        let mut output = Vec::new();
        self.write_to(&mut output)?;
        Ok(String::from_utf8(output)?)
    }
}

fn write_node<W: Write>(writer: &mut Writer<W>, node: &Node) -> Result<()> {
    let event = match node {
        Node::Element(el) => return write_element(writer, el),
        Node::Text(content) => XmlEvent::Text(BytesText::from_escaped(content.as_str())),
        Node::Comment(content) => XmlEvent::Comment(BytesText::from_escaped(content.as_str())),
        Node::CData(content) => XmlEvent::CData(BytesCData::new(content.as_str())),
        Node::Other(event) => event.0.clone(),
    };
    writer.write_event(event).map_err(Error::from_err)
}

/// Serialize an element subtree without recursion, so arbitrarily deep
/// documents cannot exhaust the stack.
fn write_element<W: Write>(writer: &mut Writer<W>, root: &Element) -> Result<()> {
    enum Step<'a> {
        Open(&'a Element),
        Close(&'a str),
        Leaf(&'a Node),
    }

    let mut steps = vec![Step::Open(root)];
    while let Some(step) = steps.pop() {
        match step {
            Step::Open(el) if el.children().is_empty() => {
                writer
                    .write_event(XmlEvent::Empty(start_from_element(el)))
                    .map_err(Error::from_err)?;
            }
            Step::Open(el) => {
                writer
                    .write_event(XmlEvent::Start(start_from_element(el)))
                    .map_err(Error::from_err)?;
                steps.push(Step::Close(el.name()));
                for child in el.children().iter().rev() {
                    steps.push(match child {
                        Node::Element(child_el) => Step::Open(child_el),
                        other => Step::Leaf(other),
                    });
                }
            }
            Step::Close(name) => {
                writer
                    .write_event(XmlEvent::End(BytesEnd::new(name)))
                    .map_err(Error::from_err)?;
            }
            Step::Leaf(node) => write_node(writer, node)?,
        }
    }
    Ok(())
}
