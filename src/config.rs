//! Loading widget configuration from TOML.
//!
//! ```toml
//! class = "is-flex is-align-items-center"
//! layout_header = "{button}{icon}"
//! layout_body = "{header}{body}"
//!
//! [header]
//! tag = "h5"
//! class = "title is-5"
//!
//! [body_container]
//! enabled = true
//! class = "has-text-weight-semibold"
//!
//! [icon_types]
//! danger = "fas fa-bomb"
//! ```
//!
//! Every key is optional; anything left out keeps the widget's default.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    error::AlertError,
    widgets::{alert::AlertFlash, counter::WidgetCounter},
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElementConfig {
    pub tag: Option<String>,
    /// Replaces the element's attributes.
    pub attributes: Option<IndexMap<String, String>>,
    /// Appended to the element's classes, after `attributes` is applied.
    pub class: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContainerConfig {
    /// Left unset, the widget's current setting is kept.
    pub enabled: Option<bool>,
    pub tag: Option<String>,
    pub attributes: Option<IndexMap<String, String>>,
    pub class: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlertConfig {
    pub id: Option<String>,
    pub tag: Option<String>,
    pub attributes: Option<IndexMap<String, String>>,
    pub class: Option<String>,
    pub header: ElementConfig,
    pub header_container: ContainerConfig,
    pub body: ElementConfig,
    pub body_container: ContainerConfig,
    pub icon: ElementConfig,
    pub icon_container: ElementConfig,
    pub button: ElementConfig,
    pub icon_types: IndexMap<String, String>,
    pub layout_header: Option<String>,
    pub layout_body: Option<String>,
}

impl AlertConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, AlertError> {
        Ok(toml::from_str(s)?)
    }

    /// Applies this configuration on top of `alert`.
    pub fn apply(&self, alert: AlertFlash) -> Result<AlertFlash, AlertError> {
        let mut alert = alert;

        if let Some(id) = &self.id {
            alert = alert.id(id.as_str());
        }
        if let Some(tag) = &self.tag {
            alert = alert.tag(tag.as_str());
        }
        if let Some(attributes) = &self.attributes {
            alert = alert.attributes(attributes.clone());
        }
        if let Some(class) = &self.class {
            alert = alert.class(class);
        }

        if let Some(tag) = &self.header.tag {
            alert = alert.header_tag(tag.as_str())?;
        }
        if let Some(attributes) = &self.header.attributes {
            alert = alert.header_attributes(attributes.clone());
        }
        if let Some(class) = &self.header.class {
            alert = alert.header_class(class);
        }
        if let Some(enabled) = self.header_container.enabled {
            alert = alert.header_container(enabled);
        }
        if let Some(tag) = &self.header_container.tag {
            alert = alert.header_container_tag(tag.as_str());
        }
        if let Some(attributes) = &self.header_container.attributes {
            alert = alert.header_container_attributes(attributes.clone());
        }
        if let Some(class) = &self.header_container.class {
            alert = alert.header_container_class(class);
        }

        if let Some(tag) = &self.body.tag {
            alert = alert.body_tag(tag.as_str())?;
        }
        if let Some(attributes) = &self.body.attributes {
            alert = alert.body_attributes(attributes.clone());
        }
        if let Some(class) = &self.body.class {
            alert = alert.body_class(class);
        }
        if let Some(enabled) = self.body_container.enabled {
            alert = alert.body_container(enabled);
        }
        if let Some(tag) = &self.body_container.tag {
            alert = alert.body_container_tag(tag.as_str());
        }
        if let Some(attributes) = &self.body_container.attributes {
            alert = alert.body_container_attributes(attributes.clone());
        }
        if let Some(class) = &self.body_container.class {
            alert = alert.body_container_class(class);
        }

        if let Some(tag) = &self.icon.tag {
            alert = alert.icon_tag(tag.as_str());
        }
        if let Some(attributes) = &self.icon.attributes {
            alert = alert.icon_attributes(attributes.clone());
        }
        if let Some(class) = &self.icon.class {
            alert = alert.icon_class(class);
        }
        if let Some(tag) = &self.icon_container.tag {
            alert = alert.icon_container_tag(tag.as_str());
        }
        if let Some(attributes) = &self.icon_container.attributes {
            alert = alert.icon_container_attributes(attributes.clone());
        }
        if let Some(class) = &self.icon_container.class {
            alert = alert.icon_container_class(class);
        }
        alert = alert.icon_types(self.icon_types.clone());

        if let Some(tag) = &self.button.tag {
            alert = alert.button_tag(tag.as_str());
        }
        if let Some(attributes) = &self.button.attributes {
            alert = alert.button_attributes(attributes.clone());
        }
        if let Some(class) = &self.button.class {
            alert = alert.button_class(class);
        }

        if let Some(layout) = &self.layout_header {
            alert = alert.layout_header(layout.as_str());
        }
        if let Some(layout) = &self.layout_body {
            alert = alert.layout_body(layout.as_str());
        }

        Ok(alert)
    }
}

impl AlertFlash {
    /// Builds a widget from `config`, drawing its id from the process-wide
    /// counter unless the configuration names one.
    pub fn from_config(config: &AlertConfig) -> Result<Self, AlertError> {
        config.apply(AlertFlash::with_counter(WidgetCounter::global()))
    }
}
