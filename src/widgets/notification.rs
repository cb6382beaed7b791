use hypertext::prelude::*;

/// A single Bulma notification for a message that is shown straight away,
/// rather than stored as a flash message first.
pub struct Notification<S> {
    pub level: &'static str,
    pub msg: S,
}

impl<S: ToString> Notification<S> {
    pub fn danger(msg: S) -> Self {
        Self {
            level: "danger",
            msg,
        }
    }
}

impl<S: ToString> Renderable for Notification<S> {
    fn render_to(
        &self,
        buffer: &mut hypertext::Buffer<hypertext::context::Node>,
    ) {
        maud!({
            div class=(format!("notification is-{}", self.level)) role="alert" {
                (self.msg.to_string())
            }
        })
        .render_to(buffer);
    }
}
