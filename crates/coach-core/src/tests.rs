#[cfg(test)]
mod tests {
    use crate::mailbox::ReplySlot;
    use crate::panel::{ChatPanel, Outgoing, PanelStatus, run_exchange};
    use crate::ports::ChatPort;
    use coach_types::config::{PersonaConfig, DEFAULT_FALLBACK_REPLY};
    use coach_types::event::PanelEvent;
    use coach_types::message::Sender;
    use coach_types::CoachError;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::HashSet;

    // ─── Mock Ports ──────────────────────────────────────────

    /// Mock port that answers every message with a fixed reply
    struct MockChat {
        reply: String,
        calls: RefCell<Vec<String>>,
    }

    impl MockChat {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ChatPort for MockChat {
        async fn send_message(&self, text: &str) -> coach_types::Result<String> {
            self.calls.borrow_mut().push(text.to_string());
            Ok(self.reply.clone())
        }

        fn endpoint(&self) -> &str {
            "mock://chat"
        }
    }

    /// Mock port that always fails with the given error
    struct FailingChat {
        error: CoachError,
        calls: RefCell<usize>,
    }

    #[async_trait(?Send)]
    impl ChatPort for FailingChat {
        async fn send_message(&self, _text: &str) -> coach_types::Result<String> {
            *self.calls.borrow_mut() += 1;
            Err(self.error.clone())
        }

        fn endpoint(&self) -> &str {
            "mock://down"
        }
    }

    fn network_down() -> FailingChat {
        FailingChat {
            error: CoachError::Network("connection refused".to_string()),
            calls: RefCell::new(0),
        }
    }

    /// Panel without the scripted greeting, so counts start at zero
    fn bare_panel() -> ChatPanel {
        let persona = PersonaConfig {
            greeting: String::new(),
            ..PersonaConfig::default()
        };
        ChatPanel::new(&persona)
    }

    // Simple single-threaded executor; every mock future is ready immediately
    fn block_on<F: std::future::Future<Output = T>, T>(f: F) -> T {
        use std::task::{Context, Poll, Wake, Waker};
        use std::sync::Arc;

        struct NoopWaker;
        impl Wake for NoopWaker {
            fn wake(self: Arc<Self>) {}
        }

        let waker = Waker::from(Arc::new(NoopWaker));
        let mut cx = Context::from_waker(&waker);
        let mut f = std::pin::pin!(f);

        loop {
            match f.as_mut().poll(&mut cx) {
                Poll::Ready(val) => return val,
                Poll::Pending => std::thread::yield_now(),
            }
        }
    }

    // ─── ReplySlot Tests ─────────────────────────────────────

    #[test]
    fn test_reply_slot_starts_empty() {
        let slot = ReplySlot::new();
        assert!(slot.take().is_none());
    }

    #[test]
    fn test_reply_slot_clone_shares_slot() {
        let task_side = ReplySlot::new();
        let ui_side = task_side.clone();

        assert!(task_side.post(PanelEvent::ReplyReceived { turn_id: 1, text: "hi".to_string() }));
        assert_eq!(ui_side.take().map(|e| e.turn_id()), Some(1));
        assert!(task_side.take().is_none());
    }

    #[test]
    fn test_reply_slot_refuses_second_result() {
        let slot = ReplySlot::new();
        assert!(slot.post(PanelEvent::ReplyReceived { turn_id: 1, text: "first".to_string() }));
        assert!(!slot.post(PanelEvent::ReplyReceived { turn_id: 2, text: "second".to_string() }));

        assert_eq!(
            slot.take(),
            Some(PanelEvent::ReplyReceived { turn_id: 1, text: "first".to_string() })
        );
        assert!(slot.take().is_none());
    }

    #[test]
    fn test_reply_slot_accepts_after_take() {
        let slot = ReplySlot::new();
        slot.post(PanelEvent::ExchangeFailed { turn_id: 1, message: "down".to_string() });
        slot.take();
        assert!(slot.post(PanelEvent::ReplyReceived { turn_id: 2, text: "back".to_string() }));
    }

    // ─── Initial State ───────────────────────────────────────

    #[test]
    fn test_panel_starts_with_greeting() {
        let panel = ChatPanel::default();
        assert_eq!(panel.messages().len(), 1);
        assert_eq!(panel.messages()[0].sender(), Sender::Assistant);
        assert!(panel.messages()[0].text().starts_with("Hey there, Hot Mess!"));
        assert_eq!(*panel.status(), PanelStatus::Idle);
        assert!(!panel.is_pending());
        assert!(panel.last_error().is_none());
        assert!(panel.input.is_empty());
    }

    #[test]
    fn test_panel_empty_greeting_skipped() {
        let panel = bare_panel();
        assert!(panel.messages().is_empty());
    }

    // ─── Submit ──────────────────────────────────────────────

    #[test]
    fn test_submit_blank_is_noop() {
        let mut panel = bare_panel();
        for text in ["", "   ", "\n\t "] {
            assert!(panel.submit(text).is_none());
        }
        assert!(panel.messages().is_empty());
        assert!(!panel.is_pending());
    }

    #[test]
    fn test_send_blank_issues_no_request() {
        let mut panel = bare_panel();
        let chat = MockChat::new("unused");
        assert!(!block_on(panel.send("  ", &chat)));
        assert!(chat.calls.borrow().is_empty());
        assert!(panel.messages().is_empty());
    }

    #[test]
    fn test_submit_appends_user_and_sets_pending() {
        let mut panel = bare_panel();
        panel.input = "  my turkey is raw  ".to_string();

        let outgoing = panel.submit_draft().unwrap();
        assert_eq!(outgoing, Outgoing { turn_id: 1, text: "my turkey is raw".to_string() });

        assert!(panel.input.is_empty());
        assert!(panel.is_pending());
        assert_eq!(panel.messages().len(), 1);
        assert_eq!(panel.messages()[0].sender(), Sender::User);
        assert_eq!(panel.messages()[0].text(), "my turkey is raw");
    }

    #[test]
    fn test_submit_while_pending_ignored() {
        let mut panel = bare_panel();
        assert!(panel.submit("first").is_some());

        panel.input = "second".to_string();
        assert!(panel.submit_draft().is_none());
        assert!(panel.submit("third").is_none());

        assert_eq!(panel.messages().len(), 1);
        // the draft survives an ignored submit
        assert_eq!(panel.input, "second");
        assert!(!panel.can_submit());
    }

    #[test]
    fn test_submit_clears_previous_error() {
        let mut panel = bare_panel();
        let down = network_down();
        block_on(panel.send("hello?", &down));
        assert!(panel.last_error().is_some());

        panel.submit("again").unwrap();
        assert!(panel.last_error().is_none());
    }

    #[test]
    fn test_can_submit() {
        let mut panel = bare_panel();
        assert!(!panel.can_submit());
        panel.input = "   ".to_string();
        assert!(!panel.can_submit());
        panel.input = "help".to_string();
        assert!(panel.can_submit());
    }

    // ─── Exchanges ───────────────────────────────────────────

    #[test]
    fn test_successful_exchange() {
        let mut panel = bare_panel();
        let chat = MockChat::new("Hang in there!");

        assert!(block_on(panel.send("Grandma hates my pie", &chat)));

        let texts: Vec<&str> = panel.messages().iter().map(|m| m.text()).collect();
        assert_eq!(texts, vec!["Grandma hates my pie", "Hang in there!"]);
        assert_eq!(panel.messages()[1].sender(), Sender::Assistant);
        assert_eq!(*chat.calls.borrow(), vec!["Grandma hates my pie".to_string()]);
        assert!(!panel.is_pending());
        assert!(panel.last_error().is_none());
    }

    #[test]
    fn test_failed_exchange_appends_fallback() {
        let mut panel = bare_panel();
        let down = network_down();

        assert!(block_on(panel.send("is anyone there", &down)));

        assert_eq!(panel.messages().len(), 2);
        assert_eq!(panel.messages()[0].text(), "is anyone there");
        assert_eq!(panel.messages()[1].text(), DEFAULT_FALLBACK_REPLY);
        assert_eq!(panel.messages()[1].sender(), Sender::Assistant);
        assert_eq!(panel.last_error(), Some("Network error: connection refused"));
        assert!(!panel.is_pending());
        assert_eq!(*down.calls.borrow(), 1);
    }

    #[test]
    fn test_status_failure_message() {
        let mut panel = bare_panel();
        let failing = FailingChat {
            error: CoachError::Status {
                status: 500,
                status_text: "Internal Server Error".to_string(),
            },
            calls: RefCell::new(0),
        };

        block_on(panel.send("hi", &failing));
        assert_eq!(panel.last_error(), Some("Failed to get response: Internal Server Error"));
        assert_eq!(panel.messages().last().unwrap().text(), DEFAULT_FALLBACK_REPLY);
    }

    #[test]
    fn test_custom_fallback_reply() {
        let persona = PersonaConfig {
            greeting: String::new(),
            fallback_reply: "Try again later".to_string(),
            ..PersonaConfig::default()
        };
        let mut panel = ChatPanel::new(&persona);
        block_on(panel.send("hi", &network_down()));
        assert_eq!(panel.messages()[1].text(), "Try again later");
    }

    #[test]
    fn test_consecutive_exchanges_keep_order() {
        let mut panel = ChatPanel::default();
        let chat = MockChat::new("ok");
        let down = network_down();

        block_on(panel.send("one", &chat));
        block_on(panel.send("two", &down));
        block_on(panel.send("three", &chat));

        let senders: Vec<Sender> = panel.messages().iter().map(|m| m.sender()).collect();
        assert_eq!(
            senders,
            vec![
                Sender::Assistant,
                Sender::User,
                Sender::Assistant,
                Sender::User,
                Sender::Assistant,
                Sender::User,
                Sender::Assistant,
            ]
        );
        assert_eq!(panel.messages()[5].text(), "three");
        // success after a failure clears the banner
        assert!(panel.last_error().is_none());
    }

    #[test]
    fn test_message_ids_unique_across_session() {
        let mut panel = ChatPanel::default();
        let chat = MockChat::new("same");
        for _ in 0..50 {
            block_on(panel.send("same", &chat));
        }
        let ids: HashSet<&str> = panel.messages().iter().map(|m| m.id()).collect();
        assert_eq!(ids.len(), panel.messages().len());
        assert_eq!(panel.messages().len(), 101);
    }

    // ─── Split Submit / Complete (UI path) ───────────────────

    #[test]
    fn test_run_exchange_through_reply_slot() {
        let mut panel = bare_panel();
        let slot = ReplySlot::new();
        let chat = MockChat::new("Deep breaths.");

        let outgoing = panel.submit("the gravy exploded").unwrap();
        assert!(slot.post(block_on(run_exchange(&chat, outgoing))));

        // nothing changes until the UI takes the result
        assert!(panel.is_pending());
        assert_eq!(panel.messages().len(), 1);

        panel.apply(slot.take().unwrap());
        assert!(!panel.is_pending());
        assert_eq!(panel.messages()[1].text(), "Deep breaths.");
    }

    #[test]
    fn test_stale_result_dropped() {
        let mut panel = bare_panel();
        let outgoing = panel.submit("hi").unwrap();

        panel.complete(outgoing.turn_id + 1, Ok("wrong turn".to_string()));
        assert!(panel.is_pending());
        assert_eq!(panel.messages().len(), 1);

        panel.complete(outgoing.turn_id, Ok("right turn".to_string()));
        assert!(!panel.is_pending());
        assert_eq!(panel.messages()[1].text(), "right turn");

        // a second completion for the same turn is ignored
        panel.complete(outgoing.turn_id, Ok("duplicate".to_string()));
        assert_eq!(panel.messages().len(), 2);
    }

    #[test]
    fn test_complete_when_idle_ignored() {
        let mut panel = bare_panel();
        panel.complete(1, Err(CoachError::Network("late".to_string())));
        assert!(panel.messages().is_empty());
        assert!(panel.last_error().is_none());
    }

    #[test]
    fn test_turn_ids_increase() {
        let mut panel = bare_panel();
        let first = panel.submit("a").unwrap();
        panel.complete(first.turn_id, Ok("x".to_string()));
        let second = panel.submit("b").unwrap();
        assert!(second.turn_id > first.turn_id);
    }
}
