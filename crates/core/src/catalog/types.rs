use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single piece of inventory on the shop floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Assigned by the store on insert, never changes afterwards.
    pub id: i64,
    pub name: String,
    pub category: String,
    pub size: String,
    /// Free-form grade label such as "Good" or "Excellent".
    pub condition: String,
    pub price: f64,
    pub quantity: i64,
    pub date_added: DateTime<Utc>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
    /// File name of an uploaded image, relative to the upload directory.
    pub image_file: Option<String>,
}

impl Item {
    /// Price formatted for display, e.g. `$99.00`.
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }

    /// Date the item was added, formatted as `YYYY-MM-DD`.
    pub fn display_date(&self) -> String {
        self.date_added.format("%Y-%m-%d").to_string()
    }

    /// Notes, or an empty string when there are none.
    pub fn notes_text(&self) -> &str {
        self.notes.as_deref().unwrap_or_default()
    }

    /// Where the browser should load the item's picture from.
    ///
    /// An external URL wins over an uploaded file.
    pub fn image_src(&self) -> Option<String> {
        match (&self.image_url, &self.image_file) {
            (Some(url), _) if !url.is_empty() => Some(url.clone()),
            (_, Some(file)) if !file.is_empty() => Some(format!("/uploads/{file}")),
            _ => None,
        }
    }
}

/// Insert payload for an [`Item`]; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub size: String,
    pub condition: String,
    pub price: f64,
    pub quantity: i64,
    pub date_added: DateTime<Utc>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
    pub image_file: Option<String>,
}

impl NewItem {
    /// Creates a new item dated now, with no notes or images.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        size: impl Into<String>,
        condition: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            size: size.into(),
            condition: condition.into(),
            price,
            quantity,
            date_added: Utc::now(),
            notes: None,
            image_url: None,
            image_file: None,
        }
    }

    /// Sets the notes for this item.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets an external image URL.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Sets an uploaded image file name.
    pub fn with_image_file(mut self, file: impl Into<String>) -> Self {
        self.image_file = Some(file.into());
        self
    }

    /// Sets the date the item was added.
    pub fn with_date_added(mut self, date_added: DateTime<Utc>) -> Self {
        self.date_added = date_added;
        self
    }

    /// Attaches the store-assigned id.
    pub fn into_item(self, id: i64) -> Item {
        Item {
            id,
            name: self.name,
            category: self.category,
            size: self.size,
            condition: self.condition,
            price: self.price,
            quantity: self.quantity,
            date_added: self.date_added,
            notes: self.notes,
            image_url: self.image_url,
            image_file: self.image_file,
        }
    }
}

/// Formats a price with a dollar sign and exactly two decimals.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}
