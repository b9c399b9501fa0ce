//! Serialize catalogs in the layout lupdate produces.

use std::{fmt::Write as _, fs, path::Path};

use quick_xml::escape::escape;

use crate::core::{Catalog, CatalogError, Message, Translation};

const INDENT: &str = "    ";

/// Render a catalog as `.ts` XML.
pub fn write_ts(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");

    let _ = write!(out, "<TS version=\"{}\"", protect_attr(&catalog.version));
    if let Some(language) = &catalog.language {
        let _ = write!(out, " language=\"{}\"", protect_attr(language));
    }
    if let Some(source_language) = &catalog.source_language {
        let _ = write!(out, " sourcelanguage=\"{}\"", protect_attr(source_language));
    }
    out.push_str(">\n");

    for context in &catalog.contexts {
        out.push_str("<context>\n");
        let _ = writeln!(out, "{INDENT}<name>{}</name>", protect(&context.name));
        for message in &context.messages {
            write_message(&mut out, message);
        }
        out.push_str("</context>\n");
    }

    out.push_str("</TS>\n");
    out
}

/// Write a catalog to disk, replacing the file.
pub fn write_ts_file(catalog: &Catalog, path: &Path) -> Result<(), CatalogError> {
    fs::write(path, write_ts(catalog)).map_err(|source| CatalogError::Io {
        path: path.to_string_lossy().to_string(),
        source,
    })
}

fn write_message(out: &mut String, message: &Message) {
    if message.numerus {
        let _ = writeln!(out, "{INDENT}<message numerus=\"yes\">");
    } else {
        let _ = writeln!(out, "{INDENT}<message>");
    }

    for location in &message.locations {
        let _ = write!(
            out,
            "{INDENT}{INDENT}<location filename=\"{}\"",
            protect_attr(&location.filename)
        );
        if let Some(line) = location.line {
            let _ = write!(out, " line=\"{}\"", line);
        }
        out.push_str("/>\n");
    }

    write_field(out, "source", Some(&message.source));
    write_field(out, "oldsource", message.old_source.as_deref());
    write_field(out, "comment", message.comment.as_deref());
    write_field(out, "oldcomment", message.old_comment.as_deref());
    write_field(out, "extracomment", message.extra_comment.as_deref());
    write_field(out, "translatorcomment", message.translator_comment.as_deref());

    let attrs = message
        .status
        .as_attr()
        .map(|kind| format!(" type=\"{}\"", kind))
        .unwrap_or_default();
    let depth = INDENT.repeat(2);

    match &message.translation {
        Translation::Singular(text) => {
            write_slot(out, &depth, "translation", &attrs, text, message.short_variants(0));
        }
        Translation::Plural(forms) if forms.is_empty() => {
            let _ = writeln!(out, "{depth}<translation{attrs}></translation>");
        }
        Translation::Plural(forms) => {
            let _ = writeln!(out, "{depth}<translation{attrs}>");
            let form_depth = INDENT.repeat(3);
            for (slot, form) in forms.iter().enumerate() {
                write_slot(
                    out,
                    &form_depth,
                    "numerusform",
                    "",
                    form,
                    message.short_variants(slot),
                );
            }
            let _ = writeln!(out, "{depth}</translation>");
        }
    }

    let _ = writeln!(out, "{INDENT}</message>");
}

/// One translated text, with its `<lengthvariant>` alternatives when it has any.
fn write_slot(
    out: &mut String,
    depth: &str,
    tag: &str,
    attrs: &str,
    text: &str,
    variants: &[String],
) {
    if variants.is_empty() {
        let _ = writeln!(out, "{depth}<{tag}{attrs}>{}</{tag}>", protect(text));
        return;
    }

    let _ = writeln!(out, "{depth}<{tag}{attrs} variants=\"yes\">");
    for variant in std::iter::once(text).chain(variants.iter().map(String::as_str)) {
        let _ = writeln!(
            out,
            "{depth}{INDENT}<lengthvariant>{}</lengthvariant>",
            protect(variant)
        );
    }
    let _ = writeln!(out, "{depth}</{tag}>");
}

fn write_field(out: &mut String, tag: &str, text: Option<&str>) {
    if let Some(text) = text {
        let _ = writeln!(out, "{INDENT}{INDENT}<{tag}>{}</{tag}>", protect(text));
    }
}

/// Escape element text; control characters become `<byte value="xNN"/>`.
fn protect(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if is_control(c) {
            out.push_str(&escape(&text[start..i]));
            let _ = write!(out, "<byte value=\"x{:x}\"/>", c as u32);
            start = i + c.len_utf8();
        }
    }
    out.push_str(&escape(&text[start..]));
    out
}

fn protect_attr(text: &str) -> String {
    escape(text).into_owned()
}

fn is_control(c: char) -> bool {
    (c < '\u{20}' && !matches!(c, '\t' | '\n' | '\r')) || c == '\u{7f}'
}
