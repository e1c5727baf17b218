//! Main egui application — owns the chat panel and runs exchanges.

use std::rc::Rc;

use egui::{self, CentralPanel};

use coach_core::mailbox::ReplySlot;
use coach_core::panel::{ChatPanel, Outgoing, run_exchange};
use coach_core::ports::ChatPort;
use coach_platform::HttpChatClient;
use coach_types::config::CoachConfig;
use coach_ui::panels::chat;
use coach_ui::theme;

/// The main application state
pub struct CoachApp {
    config: CoachConfig,
    panel: ChatPanel,
    reply_slot: ReplySlot,
    chat: Rc<dyn ChatPort>,
    first_frame: bool,
}

impl CoachApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = CoachConfig::default();
        // Endpoint is resolved here, once, and never re-read
        let chat: Rc<dyn ChatPort> = Rc::new(HttpChatClient::from_config(&config.endpoint));
        Self::with_port(config, chat)
    }

    pub fn with_port(config: CoachConfig, chat: Rc<dyn ChatPort>) -> Self {
        log::info!("Coach ready, posting to {}", chat.endpoint());
        Self {
            panel: ChatPanel::new(&config.persona),
            config,
            reply_slot: ReplySlot::new(),
            chat,
            first_frame: true,
        }
    }

    /// Send the request in the background; the result comes back
    /// through the reply slot on a later frame.
    fn dispatch(&self, outgoing: Outgoing, ctx: &egui::Context) {
        let chat = self.chat.clone();
        let reply_slot = self.reply_slot.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let event = run_exchange(chat.as_ref(), outgoing).await;
            reply_slot.post(event);
            ctx.request_repaint();
        });
    }
}

impl eframe::App for CoachApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        if let Some(event) = self.reply_slot.take() {
            self.panel.apply(event);
            ctx.request_repaint();
        }

        // keep the thinking indicator animating
        if self.panel.is_pending() {
            ctx.request_repaint();
        }

        let mut outgoing = None;
        CentralPanel::default().show(ctx, |ui| {
            outgoing = chat::chat_panel(ui, &mut self.panel, &self.config.persona);
        });

        if let Some(outgoing) = outgoing {
            self.dispatch(outgoing, ctx);
        }
    }
}
