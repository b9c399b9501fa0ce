use std::{collections::HashMap, fs, path::Path};

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::{
    core::{
        Catalog, CatalogError, Context, Message, SourceReference, Translation, TranslationStatus,
    },
    utils::{build_line_index, offset_to_line},
};

/// Parse a catalog file from disk.
pub fn parse_ts_file(path: &Path) -> Result<Catalog, CatalogError> {
    let file_path = path.to_string_lossy().to_string();
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: file_path.clone(),
        source,
    })?;
    tracing::debug!(path = %file_path, bytes = content.len(), "parsing catalog");
    parse_ts_str(&content, &file_path)
}

/// Parse catalog content; `file_path` is recorded on the catalog and used in errors.
pub fn parse_ts_str(content: &str, file_path: &str) -> Result<Catalog, CatalogError> {
    let line_index = build_line_index(content);
    let mut reader = Reader::from_str(content);
    // Translations keep their whitespace verbatim.
    reader.config_mut().trim_text(false);

    let mut parser = TsParser::new(file_path);

    loop {
        let offset = reader.buffer_position() as usize;
        let line = offset_to_line(&line_index, offset);
        let event = reader.read_event().map_err(|e| CatalogError::Xml {
            path: file_path.to_string(),
            line: offset_to_line(&line_index, reader.error_position() as usize),
            message: e.to_string(),
        })?;

        match event {
            Event::Start(e) => parser.start(&e, line)?,
            Event::Empty(e) => {
                parser.start(&e, line)?;
                parser.end()?;
            }
            Event::End(_) => parser.end()?,
            Event::Text(e) => {
                let text = e.unescape().map_err(|err| parser.xml_error(line, err))?;
                parser.text(&text);
            }
            Event::CData(e) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                parser.text(&text);
            }
            Event::Eof => break,
            // Declaration, doctype, comments and processing instructions.
            _ => {}
        }
    }

    parser.finish()
}

/// Element kinds the parser tracks on its stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    Root,
    Context,
    ContextName,
    Message,
    Field(Field),
    Translation,
    NumerusForm,
    LengthVariant,
    /// Modelled element without text of its own (`<location>`, `<byte>`).
    Leaf,
    /// Element the model does not keep, including everything below it.
    Unknown,
}

/// Plain-text children of `<message>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Source,
    OldSource,
    Comment,
    OldComment,
    ExtraComment,
    TranslatorComment,
}

/// Text of a `<translation>` or `<numerusform>`, which may carry length variants.
#[derive(Debug, Default)]
struct TextSlot {
    direct: String,
    variants: Vec<String>,
}

impl TextSlot {
    /// Primary text and the alternatives after it. Length variants replace
    /// any direct text.
    fn finish(self) -> (String, Vec<String>) {
        let mut variants = self.variants.into_iter();
        match variants.next() {
            Some(primary) => (primary, variants.collect()),
            None => (self.direct, Vec::new()),
        }
    }
}

struct TsParser<'a> {
    path: &'a str,
    catalog: Catalog,
    seen_root: bool,
    stack: Vec<Node>,
    context: Option<Context>,
    message: Option<Message>,
    has_source: bool,
    field_text: String,
    translation: TextSlot,
    form: TextSlot,
    forms: Option<Vec<String>>,
    form_variants: Vec<Vec<String>>,
    // Relative `<location>` records refer back to the previous one.
    last_filename: Option<String>,
    last_lines: HashMap<String, i64>,
}

impl<'a> TsParser<'a> {
    fn new(path: &'a str) -> Self {
        let catalog = Catalog {
            file_path: Some(path.to_string()),
            ..Default::default()
        };
        Self {
            path,
            catalog,
            seen_root: false,
            stack: Vec::new(),
            context: None,
            message: None,
            has_source: false,
            field_text: String::new(),
            translation: TextSlot::default(),
            form: TextSlot::default(),
            forms: None,
            form_variants: Vec::new(),
            last_filename: None,
            last_lines: HashMap::new(),
        }
    }

    fn format_error(&self, line: usize, message: impl Into<String>) -> CatalogError {
        CatalogError::Format {
            path: self.path.to_string(),
            line,
            message: message.into(),
        }
    }

    fn xml_error(&self, line: usize, err: impl std::fmt::Display) -> CatalogError {
        CatalogError::Xml {
            path: self.path.to_string(),
            line,
            message: err.to_string(),
        }
    }

    fn attributes(
        &self,
        e: &BytesStart<'_>,
        line: usize,
    ) -> Result<HashMap<String, String>, CatalogError> {
        let mut attrs = HashMap::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| self.xml_error(line, err))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|err| self.xml_error(line, err))?
                .into_owned();
            attrs.insert(key, value);
        }
        Ok(attrs)
    }

    /// Record attributes left over after the known ones were taken.
    fn note_attributes(&mut self, element: &str, attrs: HashMap<String, String>) {
        for key in attrs.into_keys() {
            self.catalog.unmodelled.insert(format!("{element}@{key}"));
        }
    }

    fn note_element(&mut self, name: &[u8]) -> Node {
        let name = String::from_utf8_lossy(name);
        tracing::trace!(element = %name, "skipping unmodelled element");
        self.catalog.unmodelled.insert(format!("<{name}>"));
        Node::Unknown
    }

    fn start(&mut self, e: &BytesStart<'_>, line: usize) -> Result<(), CatalogError> {
        let name = e.local_name();
        let name = name.as_ref();
        let parent = self.stack.last().copied();

        let node = match (parent, name) {
            (None, b"TS") => {
                let mut attrs = self.attributes(e, line)?;
                if let Some(version) = attrs.remove("version") {
                    self.catalog.version = version;
                }
                self.catalog.language = attrs.remove("language").filter(|l| !l.is_empty());
                self.catalog.source_language =
                    attrs.remove("sourcelanguage").filter(|l| !l.is_empty());
                self.note_attributes("TS", attrs);
                self.seen_root = true;
                Node::Root
            }
            (None, other) => {
                return Err(self.format_error(
                    line,
                    format!(
                        "expected <TS> root element, found <{}>",
                        String::from_utf8_lossy(other)
                    ),
                ));
            }
            (Some(Node::Unknown), _) => Node::Unknown,
            (Some(Node::Root), b"context") => {
                self.context = Some(Context::default());
                Node::Context
            }
            (Some(Node::Context), b"name") => {
                self.field_text.clear();
                Node::ContextName
            }
            (Some(Node::Context), b"message") => {
                let mut attrs = self.attributes(e, line)?;
                self.message = Some(Message {
                    numerus: attrs.remove("numerus").is_some_and(|v| v == "yes"),
                    line,
                    ..Default::default()
                });
                self.note_attributes("message", attrs);
                self.has_source = false;
                Node::Message
            }
            (Some(Node::Message), b"location") => {
                let attrs = self.attributes(e, line)?;
                let reference = self.resolve_location(&attrs, line)?;
                if let Some(message) = self.message.as_mut() {
                    message.locations.push(reference);
                }
                Node::Leaf
            }
            (Some(Node::Message), b"translation") => {
                let mut attrs = self.attributes(e, line)?;
                let status = TranslationStatus::from_attr(attrs.remove("type").as_deref());
                if let Some(message) = self.message.as_mut() {
                    message.status = status;
                }
                // Implied by <lengthvariant> children.
                attrs.remove("variants");
                self.note_attributes("translation", attrs);
                self.translation = TextSlot::default();
                self.forms = None;
                self.form_variants.clear();
                Node::Translation
            }
            (Some(Node::Message), field) => match Self::field(field) {
                Some(field) => {
                    self.field_text.clear();
                    Node::Field(field)
                }
                None => self.note_element(field),
            },
            (Some(Node::Translation), b"numerusform") => {
                self.form = TextSlot::default();
                self.forms.get_or_insert_with(Vec::new);
                Node::NumerusForm
            }
            (Some(Node::Translation), b"lengthvariant") => {
                self.translation.variants.push(String::new());
                Node::LengthVariant
            }
            (Some(Node::NumerusForm), b"lengthvariant") => {
                self.form.variants.push(String::new());
                Node::LengthVariant
            }
            (Some(_), b"byte") => {
                let attrs = self.attributes(e, line)?;
                let value = attrs.get("value").map(String::as_str).unwrap_or_default();
                let ch = decode_byte(value).ok_or_else(|| {
                    self.format_error(line, format!("invalid <byte value=\"{}\"/>", value))
                })?;
                self.text(ch.encode_utf8(&mut [0; 4]));
                Node::Leaf
            }
            (Some(_), other) => self.note_element(other),
        };

        self.stack.push(node);
        Ok(())
    }

    fn field(name: &[u8]) -> Option<Field> {
        match name {
            b"source" => Some(Field::Source),
            b"oldsource" => Some(Field::OldSource),
            b"comment" => Some(Field::Comment),
            b"oldcomment" => Some(Field::OldComment),
            b"extracomment" => Some(Field::ExtraComment),
            b"translatorcomment" => Some(Field::TranslatorComment),
            _ => None,
        }
    }

    fn resolve_location(
        &mut self,
        attrs: &HashMap<String, String>,
        line: usize,
    ) -> Result<SourceReference, CatalogError> {
        let filename = match attrs.get("filename") {
            Some(name) => name.clone(),
            None => self.last_filename.clone().unwrap_or_default(),
        };

        let path = self.path;
        let line_number = match attrs.get("line").map(String::as_str) {
            None | Some("") => None,
            Some(value) => {
                let invalid = || CatalogError::Format {
                    path: path.to_string(),
                    line,
                    message: format!("invalid location line \"{}\"", value),
                };
                let resolved = if value.starts_with('+') || value.starts_with('-') {
                    let delta: i64 = value.parse().map_err(|_| invalid())?;
                    self.last_lines.get(&filename).copied().unwrap_or(0) + delta
                } else {
                    value.parse().map_err(|_| invalid())?
                };
                self.last_lines.insert(filename.clone(), resolved);
                Some(u32::try_from(resolved).map_err(|_| invalid())?)
            }
        };

        self.last_filename = Some(filename.clone());
        Ok(SourceReference::new(filename, line_number))
    }

    fn text(&mut self, text: &str) {
        let Some(node) = self.stack.last().copied() else {
            return;
        };
        match node {
            Node::ContextName | Node::Field(_) => self.field_text.push_str(text),
            Node::Translation => self.translation.direct.push_str(text),
            Node::NumerusForm => self.form.direct.push_str(text),
            Node::LengthVariant => {
                let slot = match self.stack.iter().rev().nth(1) {
                    Some(Node::NumerusForm) => &mut self.form,
                    _ => &mut self.translation,
                };
                if let Some(variant) = slot.variants.last_mut() {
                    variant.push_str(text);
                }
            }
            _ => {}
        }
    }

    fn end(&mut self) -> Result<(), CatalogError> {
        let Some(node) = self.stack.pop() else {
            return Ok(());
        };

        match node {
            Node::ContextName => {
                if let Some(context) = self.context.as_mut() {
                    context.name = std::mem::take(&mut self.field_text);
                }
            }
            Node::Field(field) => {
                let text = std::mem::take(&mut self.field_text);
                let Some(message) = self.message.as_mut() else {
                    return Ok(());
                };
                match field {
                    Field::Source => {
                        message.source = text;
                        self.has_source = true;
                    }
                    Field::OldSource => message.old_source = Some(text),
                    Field::Comment => message.comment = Some(text).filter(|c| !c.is_empty()),
                    Field::OldComment => message.old_comment = Some(text),
                    Field::ExtraComment => message.extra_comment = Some(text),
                    Field::TranslatorComment => message.translator_comment = Some(text),
                }
            }
            Node::NumerusForm => {
                let (form, variants) = std::mem::take(&mut self.form).finish();
                if let Some(forms) = self.forms.as_mut() {
                    forms.push(form);
                    self.form_variants.push(variants);
                }
            }
            Node::Translation => {
                let (text, variants) = std::mem::take(&mut self.translation).finish();
                let forms = self.forms.take();
                let form_variants = std::mem::take(&mut self.form_variants);
                if let Some(message) = self.message.as_mut() {
                    let (translation, slots) = match forms {
                        Some(forms) => (Translation::Plural(forms), form_variants),
                        // Indentation around absent <numerusform> children is not a form.
                        None if message.numerus && variants.is_empty() && text.trim().is_empty() => {
                            (Translation::Plural(Vec::new()), Vec::new())
                        }
                        None if message.numerus => (Translation::Plural(vec![text]), vec![variants]),
                        None => (Translation::Singular(text), vec![variants]),
                    };
                    message.translation = translation;
                    message.length_variants = if slots.iter().all(Vec::is_empty) {
                        Vec::new()
                    } else {
                        slots
                    };
                }
            }
            Node::Message => {
                if let Some(mut message) = self.message.take() {
                    if !self.has_source {
                        return Err(self.format_error(message.line, "<message> without <source>"));
                    }
                    if message.numerus && matches!(message.translation, Translation::Singular(_)) {
                        message.translation = Translation::Plural(Vec::new());
                    }
                    if let Some(context) = self.context.as_mut() {
                        context.messages.push(message);
                    }
                }
            }
            Node::Context => {
                if let Some(context) = self.context.take() {
                    self.catalog.contexts.push(context);
                }
            }
            Node::Root | Node::LengthVariant | Node::Leaf | Node::Unknown => {}
        }

        Ok(())
    }

    fn finish(self) -> Result<Catalog, CatalogError> {
        if !self.seen_root {
            return Err(self.format_error(1, "missing <TS> root element"));
        }
        Ok(self.catalog)
    }
}

/// Decode a `<byte value=".."/>` payload: `x1b` (hex) or `27` (decimal).
fn decode_byte(value: &str) -> Option<char> {
    let code = match value.strip_prefix('x').or_else(|| value.strip_prefix('X')) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => value.parse().ok()?,
    };
    char::from_u32(code)
}
