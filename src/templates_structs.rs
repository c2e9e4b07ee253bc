// Template context structures for Askama templates.

use askama::Template;

use crate::models::talk::Talk;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub app_name: String,
}

#[derive(Template)]
#[template(path = "new-talk.html")]
pub struct NewTalkTemplate {
    pub app_name: String,
    pub time_zones: Vec<String>,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "talk-id.html")]
pub struct TalkDetailTemplate {
    pub app_name: String,
    pub talk: Talk,
}
