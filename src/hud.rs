use crate::constants::*;
use crate::markup;
use hgif_core::{Agent, HudSink, LogBook, Strategy};
use web_sys as web;

/// Layer / quality / fps readouts over the player.
pub struct DomHud {
    layer: Option<web::Element>,
    quality: Option<web::Element>,
    fps: Option<web::Element>,
    last: Option<Strategy>,
}

impl DomHud {
    pub fn new(document: &web::Document) -> Self {
        Self {
            layer: document.get_element_by_id(ID_CURRENT_LAYER),
            quality: document.get_element_by_id(ID_CURRENT_QUALITY),
            fps: document.get_element_by_id(ID_CURRENT_FPS),
            last: None,
        }
    }
}

impl HudSink for DomHud {
    fn update_hud(&mut self, strategy: &Strategy) {
        // DOM writes are skipped when nothing changed since the last frame
        if self.last.as_ref() == Some(strategy) {
            return;
        }
        if let Some(el) = &self.layer {
            el.set_text_content(Some(strategy.layer.label()));
        }
        if let Some(el) = &self.quality {
            el.set_text_content(Some(strategy.quality_label));
        }
        if let Some(el) = &self.fps {
            el.set_text_content(Some(&strategy.fps.to_string()));
        }
        self.last = Some(*strategy);
    }
}

/// Re-render `#agent-log` whenever the agent logs.
pub fn wire_log_list(document: &web::Document, agent: &mut Agent) {
    let Some(list) = document.get_element_by_id(ID_AGENT_LOG) else {
        log::warn!("[hud] #{ID_AGENT_LOG} missing; agent log stays in the console");
        return;
    };
    render_log(&list, agent.log_book());
    agent.subscribe(move |_entry, book| render_log(&list, book));
}

fn render_log(list: &web::Element, book: &LogBook) {
    list.set_inner_html(&markup::log_list_html(book));
}
