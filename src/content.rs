//! Page documents and the localized content applier.
//!
//! A [`Document`] is the fixed set of named content slots a page exposes,
//! plus its title, language tag, footer heading, and the bilingual
//! language-switch affordance. The applier copies one translation table
//! into those slots.
//!
//! Slots come in two kinds. `Text` slots hold plain text that is escaped
//! whenever the document is serialized to markup. `Markup` slots receive
//! trusted static fragments authored alongside the code and are emitted
//! verbatim; nothing user-supplied ever lands in one.

use crate::i18n::{Locale, PageStrings};
use crate::page::{PageKind, PageLocation};
use std::borrow::Cow;
use tracing::warn;

/// Whether a slot accepts plain text or a trusted markup fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Text,
    Markup,
}

#[derive(Debug, Clone)]
pub struct Slot {
    kind: SlotKind,
    content: String,
}

impl Slot {
    pub fn kind(&self) -> SlotKind {
        self.kind
    }

    /// The raw slot content, exactly as applied.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The content as it appears in serialized markup: escaped for `Text`
    /// slots, verbatim for `Markup` slots.
    pub fn rendered(&self) -> Cow<'_, str> {
        match self.kind {
            SlotKind::Text => escape_text(&self.content),
            SlotKind::Markup => Cow::Borrowed(self.content.as_str()),
        }
    }
}

/// The bilingual language-switch control: always points at the locale that
/// is currently inactive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSwitch {
    /// The visible language code on the control ("fr" when English is active)
    pub code: &'static str,
    /// The current page location with `lang` set to the other locale
    pub target: String,
}

/// One page's content surface.
#[derive(Debug, Clone)]
pub struct Document {
    pub title: String,
    /// Document language tag, set from the resolved locale
    pub lang: &'static str,
    pub footer_heading: String,
    pub language_switch: Option<LanguageSwitch>,
    slots: Vec<(&'static str, Slot)>,
}

impl Document {
    /// An empty document exposing the given slots.
    pub fn with_slots(slots: &[(&'static str, SlotKind)]) -> Document {
        Document {
            title: String::new(),
            lang: Locale::DEFAULT.code(),
            footer_heading: String::new(),
            language_switch: None,
            slots: slots
                .iter()
                .map(|&(id, kind)| {
                    (
                        id,
                        Slot {
                            kind,
                            content: String::new(),
                        },
                    )
                })
                .collect(),
        }
    }

    /// The document skeleton for a page, with that page's slot set.
    pub fn for_page(kind: PageKind) -> Document {
        use SlotKind::{Markup, Text};
        match kind {
            PageKind::Catalogue => Document::with_slots(&[
                ("page-title", Text),
                ("intro-text", Text),
                ("toggle-columns-label", Text),
                ("prototype-notice", Text),
                ("last-updated", Text),
            ]),
            PageKind::Dictionary => Document::with_slots(&[
                ("page-title", Text),
                ("subtitle", Text),
                ("intro-text", Text),
                ("detailed-content", Markup),
                ("prototype-notice", Text),
                ("last-updated", Text),
            ]),
            PageKind::About => Document::with_slots(&[
                ("page-title", Text),
                ("subtitle", Text),
                ("intro-text", Text),
                ("detailed-content", Markup),
                ("prototype-notice", Text),
            ]),
        }
    }

    pub fn slot(&self, id: &str) -> Option<&Slot> {
        self.slots
            .iter()
            .find(|(slot_id, _)| *slot_id == id)
            .map(|(_, slot)| slot)
    }

    /// Raw content of a slot, if the slot exists.
    pub fn slot_content(&self, id: &str) -> Option<&str> {
        self.slot(id).map(Slot::content)
    }

    /// Slot ids in declaration order.
    pub fn slot_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slots.iter().map(|(id, _)| *id)
    }

    /// Write into a slot. Returns false when the document has no such
    /// slot; the caller decides whether that is worth logging.
    pub fn set_slot(&mut self, id: &str, content: &str) -> bool {
        match self.slots.iter_mut().find(|(slot_id, _)| *slot_id == id) {
            Some((_, slot)) => {
                slot.content = content.to_string();
                true
            }
            None => false,
        }
    }

    /// Serialize the document body to a markup fragment. Text slots are
    /// escaped here; markup slots pass through verbatim.
    pub fn render_html(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<main lang=\"{}\" title=\"{}\">\n",
            self.lang,
            escape_text(&self.title)
        ));
        for (id, slot) in &self.slots {
            if slot.content.is_empty() {
                continue;
            }
            out.push_str(&format!(
                "  <section id=\"{}\">{}</section>\n",
                id,
                slot.rendered()
            ));
        }
        if let Some(switch) = &self.language_switch {
            out.push_str(&format!(
                "  <nav lang-code=\"{}\" lang-href=\"{}\"></nav>\n",
                switch.code,
                escape_text(&switch.target)
            ));
        }
        out.push_str(&format!(
            "  <footer contextual-heading=\"{}\"></footer>\n</main>\n",
            escape_text(&self.footer_heading)
        ));
        out
    }
}

/// Apply one translation table to a document.
///
/// Sets the title, language tag, footer heading, every slot the table has
/// content for, and the language switch. A slot the document does not
/// expose is logged and skipped; the remaining slots still update.
pub fn apply_content(
    doc: &mut Document,
    locale: Locale,
    strings: &PageStrings,
    location: &PageLocation,
) {
    doc.lang = locale.code();
    doc.title = strings.app_title.to_string();
    doc.footer_heading = strings.footer_heading.to_string();

    let other = locale.other();
    doc.language_switch = Some(LanguageSwitch {
        code: other.code(),
        target: location.with_lang(other.code()),
    });

    let mut set = |id: &str, content: &str| {
        if !doc.set_slot(id, content) {
            warn!("No '{}' slot on the {} page, skipping", id, location.kind().path());
        }
    };

    set("page-title", strings.page_title);
    set("intro-text", strings.intro_text);
    set("prototype-notice", strings.prototype_notice);
    if let Some(subtitle) = strings.subtitle {
        set("subtitle", subtitle);
    }
    if let Some(markup) = strings.detailed_content {
        set("detailed-content", markup);
    }
    if let Some(label) = strings.toggle_columns {
        set("toggle-columns-label", label);
    }
}

/// Flatten a trusted markup fragment to plain text for terminal display.
///
/// Block-ending tags become line breaks, list items become dashes, all
/// other tags are stripped, and the basic entities are restored.
pub fn markup_to_text(fragment: &str) -> String {
    static TAG_REGEX: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
    let tags = TAG_REGEX.get_or_init(|| regex::Regex::new(r"<[^>]+>").expect("valid regex"));

    let structured = fragment
        .replace("<br>", "\n")
        .replace("</p>", "\n")
        .replace("</h3>", "\n")
        .replace("</ul>", "\n")
        .replace("</li>", "\n")
        .replace("<li>", "- ");
    let stripped = tags.replace_all(&structured, "");

    let unescaped = stripped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    let lines: Vec<&str> = unescaped
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    lines.join("\n")
}

/// Escape text for inclusion in markup.
///
/// The five characters with structural meaning are replaced; everything
/// else passes through untouched. Borrows when no escaping is needed.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
