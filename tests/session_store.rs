//! Rendering against a flash store that keeps its messages in a serialised
//! session payload, the way a cookie-backed session would.

use bulma_alert::{
    AlertFlash, FlashFields, FlashStore, MemoryFlash, WidgetCounter,
};
use indexmap::IndexMap;

struct Session {
    payload: String,
    removed: Vec<String>,
}

impl Session {
    fn new(flash: &MemoryFlash) -> Self {
        Self {
            payload: flash.to_json().unwrap(),
            removed: Vec::new(),
        }
    }

    fn flash(&self) -> MemoryFlash {
        MemoryFlash::from_json(&self.payload).unwrap()
    }
}

impl FlashStore for Session {
    fn get_all(&self) -> IndexMap<String, FlashFields> {
        self.flash().get_all()
    }

    fn remove(&mut self, level: &str) {
        let mut flash = self.flash();
        FlashStore::remove(&mut flash, level);
        self.payload = flash.to_json().unwrap();
        self.removed.push(level.to_string());
    }
}

#[test]
fn renders_and_consumes_session_messages() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let mut flash = MemoryFlash::new();
    flash.add("warning", [("body", "Disk almost full.")]);
    flash.add("info", [("header", "Update"), ("body", "Restart later.")]);
    let mut session = Session::new(&flash);

    let alert = AlertFlash::with_counter(&WidgetCounter::new())
        .layout_header("{header}")
        .layout_body("{body}");
    let html = alert.render(&mut session);

    assert_eq!(
        html,
        "<div id=\"w0-alert\" class=\"notification is-warning\" role=\"alert\">\n\
         <span>Disk almost full.</span>\n\
         </div>\n\
         <div id=\"w0-alert\" class=\"notification is-info\" role=\"alert\">\n\
         <h4>Update</h4>\n\
         <span>Restart later.</span>\n\
         </div>"
    );
    assert_eq!(session.removed, ["warning", "info"]);
    assert_eq!(session.payload, "{}");
    assert_eq!(alert.render(&mut session), "");
}

#[test]
fn default_layout_shows_icon_and_button() {
    let mut flash = MemoryFlash::new();
    flash.add("success", [("body", "Saved.")]);

    let html = AlertFlash::with_id("save").render(&mut flash);

    assert_eq!(
        html,
        "<div id=\"save-alert\" class=\"notification is-success\" role=\"alert\">\n\
         <div><i class=\"fas fa-check-circle\"></i></div>\n\
         <span>Saved.</span>\n\
         <button type=\"button\" class=\"delete\"></button>\n\
         </div>"
    );
}

#[test]
fn a_store_can_be_used_behind_a_trait_object() {
    let mut flash = MemoryFlash::new();
    flash.add("danger", [("body", "Nope.")]);
    let store: &mut dyn FlashStore = &mut flash;

    let html = AlertFlash::with_id("x").layout_body("{body}").render(store);

    assert!(html.contains("<span>Nope.</span>"));
    assert!(flash.is_empty());
}
