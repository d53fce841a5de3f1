//! Typed model of the Notion API surface this pipeline consumes
//!
//! Blocks arrive as JSON objects keyed by a `type` discriminator, with the
//! kind-specific payload nested under a field of the same name. The model
//! is a closed enum, so an unrecognized kind lands in [`BlockKind::Unknown`]
//! with its raw payload instead of failing deserialization, and every
//! dispatch site is an exhaustive match.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One structural unit of a Notion document
#[derive(Debug, Clone)]
pub struct Block {
    pub id: String,
    /// Whether nested children exist that must be fetched separately
    pub has_children: bool,
    pub kind: BlockKind,
}

/// Block payloads, one variant per supported kind
#[derive(Debug, Clone)]
pub enum BlockKind {
    Paragraph(TextPayload),
    Heading1(TextPayload),
    Heading2(TextPayload),
    Heading3(TextPayload),
    BulletedListItem(TextPayload),
    NumberedListItem(TextPayload),
    Quote(TextPayload),
    Image(ImagePayload),
    Divider,
    Table(TablePayload),
    TableRow(TableRowPayload),
    /// Any kind the converter does not know about; the raw payload is kept
    /// for best-effort text extraction
    Unknown(Value),
}

/// Payload of the text-bearing block kinds
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextPayload {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
}

/// A styled span of text within a block; order is significant
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub plain_text: String,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub href: Option<String>,
}

/// Style flags on a rich-text run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub code: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub underline: bool,
}

/// Image payload: the source is either an external URL or a file hosted by
/// Notion, and the caption doubles as alt text
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImagePayload {
    #[serde(default)]
    pub external: Option<FileLink>,
    #[serde(default)]
    pub file: Option<FileLink>,
    #[serde(default)]
    pub caption: Vec<RichText>,
}

impl ImagePayload {
    /// Resolve the source URL from whichever variant is present
    pub fn url(&self) -> Option<&str> {
        self.external
            .as_ref()
            .or(self.file.as_ref())
            .map(|f| f.url.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileLink {
    #[serde(default)]
    pub url: String,
}

/// Table payload; the header flags drive cell-tag selection when rendering
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TablePayload {
    #[serde(default)]
    pub table_width: usize,
    #[serde(default)]
    pub has_column_header: bool,
    #[serde(default)]
    pub has_row_header: bool,
}

/// Table row payload: one rich-text sequence per cell
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableRowPayload {
    #[serde(default)]
    pub cells: Vec<Vec<RichText>>,
}

/// Wire shape of a block before the payload is routed by kind
#[derive(Deserialize)]
struct RawBlock {
    #[serde(default)]
    id: String,
    #[serde(default)]
    has_children: bool,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(flatten)]
    payload: serde_json::Map<String, Value>,
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Block, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawBlock::deserialize(deserializer)?;
        let payload = raw.payload.get(&raw.kind).cloned().unwrap_or(Value::Null);

        let kind = match raw.kind.as_str() {
            "paragraph" => BlockKind::Paragraph(section::<_, D>(payload)?),
            "heading_1" => BlockKind::Heading1(section::<_, D>(payload)?),
            "heading_2" => BlockKind::Heading2(section::<_, D>(payload)?),
            "heading_3" => BlockKind::Heading3(section::<_, D>(payload)?),
            "bulleted_list_item" => BlockKind::BulletedListItem(section::<_, D>(payload)?),
            "numbered_list_item" => BlockKind::NumberedListItem(section::<_, D>(payload)?),
            "quote" => BlockKind::Quote(section::<_, D>(payload)?),
            "image" => BlockKind::Image(section::<_, D>(payload)?),
            "divider" => BlockKind::Divider,
            "table" => BlockKind::Table(section::<_, D>(payload)?),
            "table_row" => BlockKind::TableRow(section::<_, D>(payload)?),
            _ => BlockKind::Unknown(payload),
        };

        Ok(Block {
            id: raw.id,
            has_children: raw.has_children,
            kind,
        })
    }
}

/// Decode a kind-specific payload section, treating a missing section as
/// all-defaults rather than an error
fn section<'de, T, D>(value: Value) -> Result<T, D::Error>
where
    T: DeserializeOwned + Default,
    D: Deserializer<'de>,
{
    if value.is_null() {
        Ok(T::default())
    } else {
        serde_json::from_value(value).map_err(serde::de::Error::custom)
    }
}

/// One page of a paginated list response
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedList<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// A database row describing one post
#[derive(Debug, Clone, Deserialize)]
pub struct PageObject {
    pub id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub properties: HashMap<String, Property>,
}

impl PageObject {
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }
}

/// A database property value; only the facets this pipeline reads are
/// modeled, everything else is ignored
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Property {
    #[serde(default)]
    pub title: Option<Vec<RichText>>,
    #[serde(default)]
    pub select: Option<SelectValue>,
    #[serde(default)]
    pub date: Option<DateValue>,
}

impl Property {
    /// Concatenated plain text of a title property
    pub fn title_text(&self) -> Option<String> {
        let runs = self.title.as_ref()?;
        if runs.is_empty() {
            return None;
        }
        Some(runs.iter().map(|r| r.plain_text.as_str()).collect())
    }

    pub fn select_name(&self) -> Option<&str> {
        self.select.as_ref().map(|s| s.name.as_str())
    }

    pub fn date_start(&self) -> Option<&str> {
        self.date.as_ref().map(|d| d.start.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectValue {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DateValue {
    #[serde(default)]
    pub start: String,
}
