use std::fmt;

use hypertext::{Raw, prelude::*};
use indexmap::IndexMap;

use crate::{
    error::{AlertError, Element},
    flash::{FlashFields, FlashStore},
    html::{Attributes, Tag, escape},
    layout::{Fragment, Fragments, substitute},
    widgets::counter::WidgetCounter,
};

/// Renders pending flash messages as Bulma notifications.
///
/// Each severity level in the store becomes one
/// `<div class="notification is-<level>" role="alert">`. What goes inside is
/// decided by two layout templates: the header layout (only used when the
/// message has a `header` field) and the body layout. Both may reference
/// `{header}`, `{body}`, `{icon}` and `{button}`.
///
/// The widget is configured by value:
///
/// ```
/// use bulma_alert::{AlertFlash, MemoryFlash, WidgetCounter};
///
/// # fn main() -> Result<(), bulma_alert::AlertError> {
/// let mut flash = MemoryFlash::new();
/// flash.add("success", [("header", "Saved"), ("body", "All good.")]);
///
/// let alert = AlertFlash::with_counter(&WidgetCounter::new())
///     .header_tag("h5")?
///     .header_class("title is-5")
///     .layout_header("{header}")
///     .layout_body("{body}{button}");
///
/// let html = alert.render(&mut flash);
/// assert!(html.starts_with(
///     r#"<div id="w0-alert" class="notification is-success" role="alert">"#
/// ));
/// assert!(flash.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AlertFlash {
    id: String,
    tag: String,
    attributes: Attributes,

    header_tag: String,
    header_attributes: Attributes,
    header_container: bool,
    header_container_tag: String,
    header_container_attributes: Attributes,

    body_tag: String,
    body_attributes: Attributes,
    body_container: bool,
    body_container_tag: String,
    body_container_attributes: Attributes,

    icon_tag: String,
    icon_attributes: Attributes,
    icon_container_tag: String,
    icon_container_attributes: Attributes,
    icon_types: IndexMap<String, String>,

    button_tag: String,
    button_attributes: Attributes,

    layout_header: String,
    layout_body: String,
}

fn default_icon_types() -> IndexMap<String, String> {
    [
        ("danger", "far fa-times-circle"),
        ("info", "fas fa-info-circle"),
        ("success", "fas fa-check-circle"),
        ("warning", "fas fa-exclamation-triangle"),
    ]
    .into_iter()
    .map(|(level, class)| (level.to_string(), class.to_string()))
    .collect()
}

fn non_empty_tag(tag: String, element: Element) -> Result<String, AlertError> {
    if tag.is_empty() {
        tracing::debug!(%element, "rejecting empty tag name");
        return Err(AlertError::EmptyTag(element));
    }
    Ok(tag)
}

impl Default for AlertFlash {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertFlash {
    /// Creates a widget whose id comes from the process-wide counter.
    pub fn new() -> Self {
        Self::with_counter(WidgetCounter::global())
    }

    pub fn with_counter(counter: &WidgetCounter) -> Self {
        Self::with_id(counter.next_id())
    }

    /// Creates a widget with an explicit id. The container's `id` attribute
    /// is `<id>-alert`.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag: "div".to_string(),
            attributes: Attributes::new(),
            header_tag: "h4".to_string(),
            header_attributes: Attributes::new(),
            header_container: false,
            header_container_tag: "div".to_string(),
            header_container_attributes: Attributes::new(),
            body_tag: "span".to_string(),
            body_attributes: Attributes::new(),
            body_container: false,
            body_container_tag: "div".to_string(),
            body_container_attributes: Attributes::new(),
            icon_tag: "i".to_string(),
            icon_attributes: Attributes::new(),
            icon_container_tag: "div".to_string(),
            icon_container_attributes: Attributes::new(),
            icon_types: default_icon_types(),
            button_tag: "button".to_string(),
            button_attributes: [("class", "delete")].into_iter().collect(),
            layout_header: "{header}".to_string(),
            layout_body: "{icon}{body}{button}".to_string(),
        }
    }

    pub fn widget_id(&self) -> &str {
        &self.id
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Tag of the outer container (`div` by default).
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Extra attributes for the outer container. A `class` entry is appended
    /// to `notification is-<level>`; `id` and `role` replace the defaults.
    pub fn attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes = attributes.into_iter().collect();
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.attributes.add_class(class);
        self
    }

    pub fn header_tag(
        mut self,
        tag: impl Into<String>,
    ) -> Result<Self, AlertError> {
        self.header_tag = non_empty_tag(tag.into(), Element::Header)?;
        Ok(self)
    }

    pub fn header_attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.header_attributes = attributes.into_iter().collect();
        self
    }

    pub fn header_class(mut self, class: &str) -> Self {
        self.header_attributes.add_class(class);
        self
    }

    /// Wraps the header tag in a container element.
    pub fn header_container(mut self, enabled: bool) -> Self {
        self.header_container = enabled;
        self
    }

    pub fn header_container_tag(mut self, tag: impl Into<String>) -> Self {
        self.header_container_tag = tag.into();
        self
    }

    pub fn header_container_attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.header_container_attributes = attributes.into_iter().collect();
        self
    }

    pub fn header_container_class(mut self, class: &str) -> Self {
        self.header_container_attributes.add_class(class);
        self
    }

    pub fn body_tag(
        mut self,
        tag: impl Into<String>,
    ) -> Result<Self, AlertError> {
        self.body_tag = non_empty_tag(tag.into(), Element::Body)?;
        Ok(self)
    }

    pub fn body_attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.body_attributes = attributes.into_iter().collect();
        self
    }

    pub fn body_class(mut self, class: &str) -> Self {
        self.body_attributes.add_class(class);
        self
    }

    /// Wraps the whole body layout in a container element.
    pub fn body_container(mut self, enabled: bool) -> Self {
        self.body_container = enabled;
        self
    }

    pub fn body_container_tag(mut self, tag: impl Into<String>) -> Self {
        self.body_container_tag = tag.into();
        self
    }

    pub fn body_container_attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.body_container_attributes = attributes.into_iter().collect();
        self
    }

    pub fn body_container_class(mut self, class: &str) -> Self {
        self.body_container_attributes.add_class(class);
        self
    }

    pub fn icon_tag(mut self, tag: impl Into<String>) -> Self {
        self.icon_tag = tag.into();
        self
    }

    /// Attributes of the icon element. Their classes come before the
    /// level's icon class.
    pub fn icon_attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.icon_attributes = attributes.into_iter().collect();
        self
    }

    pub fn icon_class(mut self, class: &str) -> Self {
        self.icon_attributes.add_class(class);
        self
    }

    pub fn icon_container_tag(mut self, tag: impl Into<String>) -> Self {
        self.icon_container_tag = tag.into();
        self
    }

    pub fn icon_container_attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.icon_container_attributes = attributes.into_iter().collect();
        self
    }

    pub fn icon_container_class(mut self, class: &str) -> Self {
        self.icon_container_attributes.add_class(class);
        self
    }

    /// Sets the icon class used for each given level. Levels that are not
    /// mentioned keep their current icon.
    pub fn icon_types<I, K, V>(mut self, icon_types: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (level, class) in icon_types {
            self.icon_types.insert(level.into(), class.into());
        }
        self
    }

    pub fn button_tag(mut self, tag: impl Into<String>) -> Self {
        self.button_tag = tag.into();
        self
    }

    /// Replaces the button's attributes (`class="delete"` by default).
    /// `type="button"` is always emitted first.
    pub fn button_attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.button_attributes = attributes.into_iter().collect();
        self
    }

    pub fn button_class(mut self, class: &str) -> Self {
        self.button_attributes.add_class(class);
        self
    }

    pub fn layout_header(mut self, layout: impl Into<String>) -> Self {
        self.layout_header = layout.into();
        self
    }

    pub fn layout_body(mut self, layout: impl Into<String>) -> Self {
        self.layout_body = layout.into();
        self
    }

    /// Renders every pending level and removes it from `flash`.
    ///
    /// Levels are rendered in store order and joined by newlines. A level
    /// with an empty name and no fields renders nothing but is still
    /// removed.
    #[tracing::instrument(skip_all, fields(id = %self.id))]
    pub fn render<F>(&self, flash: &mut F) -> String
    where
        F: FlashStore + ?Sized,
    {
        let mut rendered = Vec::new();
        for (level, fields) in flash.get_all() {
            if level.is_empty() && fields.is_empty() {
                tracing::trace!("dropping empty flash entry");
                flash.remove(&level);
                continue;
            }
            tracing::debug!(
                severity = %level,
                header = fields.contains_key("header"),
                body = fields.contains_key("body"),
                "rendering flash message"
            );
            rendered.push(self.render_level(&level, &fields));
            flash.remove(&level);
        }
        rendered.join("\n")
    }

    pub fn render_markup<F>(&self, flash: &mut F) -> AlertMarkup
    where
        F: FlashStore + ?Sized,
    {
        AlertMarkup(self.render(flash))
    }

    /// Renders one message without touching any store.
    pub fn render_level(&self, level: &str, fields: &FlashFields) -> String {
        let header = field(fields, "header")
            .map(|text| self.render_header(text))
            .unwrap_or_default();
        let body = field(fields, "body")
            .map(|text| self.render_body(text))
            .unwrap_or_default();
        let has_header = !header.is_empty();

        let fragments = Fragments {
            header,
            body,
            icon: self.render_icon(level),
            button: self.render_button(),
        };

        let mut regions = Vec::with_capacity(2);
        if has_header {
            regions.push(substitute(&self.layout_header, &fragments));
        }
        let body_region = substitute(&self.layout_body, &fragments);
        if self.body_container && !body_region.is_empty() {
            regions.push(
                Tag::new(
                    &self.body_container_tag,
                    &self.body_container_attributes,
                )
                .content(&body_region)
                .block()
                .render(),
            );
        } else {
            regions.push(body_region);
        }
        regions.retain(|region| !region.is_empty());
        let content = regions.join("\n");

        let mut attributes = Attributes::new();
        attributes.set("id", format!("{}-alert", self.id));
        attributes.set("class", format!("notification is-{level}"));
        attributes.set("role", "alert");
        attributes.merge(&self.attributes);

        Tag::new(&self.tag, &attributes)
            .content(&content)
            .block()
            .render()
    }

    fn render_header(&self, text: &str) -> Fragment {
        let header = Tag::new(&self.header_tag, &self.header_attributes)
            .content(&escape(text))
            .render();
        if self.header_container {
            Fragment::block(
                Tag::new(
                    &self.header_container_tag,
                    &self.header_container_attributes,
                )
                .content(&header)
                .block()
                .render(),
            )
        } else {
            Fragment::inline(header)
        }
    }

    fn render_body(&self, text: &str) -> Fragment {
        Fragment::inline(
            Tag::new(&self.body_tag, &self.body_attributes)
                .content(&escape(text))
                .render(),
        )
    }

    fn render_icon(&self, level: &str) -> Fragment {
        let Some(icon_class) = self
            .icon_types
            .get(level)
            .filter(|class| !class.is_empty())
        else {
            return Fragment::default();
        };

        let mut attributes = self.icon_attributes.clone();
        attributes.add_class(icon_class);
        let icon = Tag::new(&self.icon_tag, &attributes).render();

        Fragment::block(
            Tag::new(&self.icon_container_tag, &self.icon_container_attributes)
                .content(&icon)
                .render(),
        )
    }

    fn render_button(&self) -> Fragment {
        let mut attributes = Attributes::new();
        attributes.set("type", "button");
        for (key, value) in self.button_attributes.iter() {
            attributes.set(key, value);
        }
        Fragment::block(Tag::new(&self.button_tag, &attributes).render())
    }
}

/// A field value, treating empty strings as absent.
fn field<'f>(fields: &'f FlashFields, name: &str) -> Option<&'f str> {
    fields
        .get(name)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

/// Rendered alerts, ready to be embedded in a `maud!` page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertMarkup(String);

impl AlertMarkup {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AlertMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Renderable for AlertMarkup {
    fn render_to(
        &self,
        buffer: &mut hypertext::Buffer<hypertext::context::Node>,
    ) {
        // Every piece of user text was escaped while building the markup.
        Raw::dangerously_create(self.0.as_str()).render_to(buffer);
    }
}
