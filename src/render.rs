use askama::Template;

use crate::errors::AppError;
use crate::models::talk::Talk;
use crate::templates_structs::{IndexTemplate, NewTalkTemplate, TalkDetailTemplate};

/// Views the site can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Index,
    NewTalk,
    TalkId,
}

impl View {
    pub fn name(self) -> &'static str {
        match self {
            View::Index => "index",
            View::NewTalk => "new-talk",
            View::TalkId => "talk-id",
        }
    }
}

/// Per-request data handed to a view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewPayload {
    pub talk: Option<Talk>,
    pub time_zones: Vec<String>,
    pub errors: Vec<String>,
}

/// Turns a view plus payload into an HTML document.
pub trait Renderer: Send + Sync {
    fn render(&self, view: View, payload: Option<ViewPayload>) -> Result<String, AppError>;
}

/// Renderer backed by the compiled askama templates.
#[derive(Debug, Clone)]
pub struct AskamaRenderer {
    app_name: String,
}

impl AskamaRenderer {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self { app_name: app_name.into() }
    }
}

impl Renderer for AskamaRenderer {
    fn render(&self, view: View, payload: Option<ViewPayload>) -> Result<String, AppError> {
        let app_name = self.app_name.clone();
        let html = match view {
            View::Index => IndexTemplate { app_name }.render()?,
            View::NewTalk => {
                let payload = payload.unwrap_or_default();
                NewTalkTemplate {
                    app_name,
                    time_zones: payload.time_zones,
                    errors: payload.errors,
                }
                .render()?
            }
            View::TalkId => {
                let talk = payload
                    .and_then(|p| p.talk)
                    .ok_or(AppError::MissingPayload(view.name()))?;
                TalkDetailTemplate { app_name, talk }.render()?
            }
        };
        Ok(html)
    }
}
