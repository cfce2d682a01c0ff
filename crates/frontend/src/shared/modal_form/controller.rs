//! State of the single modal form
//!
//! Pure state machine with no DOM access. The host feeds it user actions and
//! request results; it answers with the [`Effect`] the host has to run. Every
//! open starts a new generation, and results tagged with an older one are
//! dropped.

use contracts::shared::modal_form::ModalFormOutcome;

pub type Generation = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    /// GET in flight
    Loading,
    /// Content shown (or the load failed), waiting for the user
    Ready,
    /// POST in flight
    Submitting,
}

/// Side effect requested from the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch { url: String, generation: Generation },
    Post { url: String, body: String, generation: Generation },
    Reload,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalFormController {
    generation: Generation,
    phase: ModalPhase,
    url: Option<String>,
    content: Option<String>,
    /// Bumped on every content change, identical fragments included
    revision: u64,
    error: Option<String>,
}

impl ModalFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_open(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    /// Fragment currently shown in the modal body
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Changes whenever the server sent a fragment, even an unchanged one
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Inline error line, if the last request failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Action URL submissions go to; `None` while there is no form to submit
    pub fn submit_target(&self) -> Option<&str> {
        match self.phase {
            ModalPhase::Ready | ModalPhase::Submitting if self.content.is_some() => {
                self.url.as_deref()
            }
            _ => None,
        }
    }

    /// A trigger was clicked: start a new generation and fetch the form
    pub fn open(&mut self, url: impl Into<String>) -> Effect {
        let url = url.into();
        self.generation += 1;
        self.phase = ModalPhase::Loading;
        self.url = Some(url.clone());
        self.clear_content();
        self.error = None;
        Effect::Fetch {
            url,
            generation: self.generation,
        }
    }

    /// Result of the GET started by `open`; `false` when it was stale
    pub fn loaded(&mut self, generation: Generation, result: Result<String, String>) -> bool {
        if generation != self.generation || self.phase != ModalPhase::Loading {
            return false;
        }
        self.phase = ModalPhase::Ready;
        match result {
            Ok(html) => self.show(html),
            Err(message) => self.error = Some(message),
        }
        true
    }

    /// The modal form was submitted with its serialized fields
    ///
    /// Ignored while a POST is in flight or when no form is shown.
    pub fn submit(&mut self, body: String) -> Option<Effect> {
        let url = self.submit_target()?.to_string();
        if self.phase != ModalPhase::Ready {
            return None;
        }
        self.phase = ModalPhase::Submitting;
        Some(Effect::Post {
            url,
            body,
            generation: self.generation,
        })
    }

    /// Reply to the POST; `Saved` closes the modal and asks for a reload
    pub fn responded(&mut self, generation: Generation, outcome: ModalFormOutcome) -> Option<Effect> {
        if generation != self.generation || self.phase != ModalPhase::Submitting {
            return None;
        }
        match outcome {
            ModalFormOutcome::Saved => {
                self.reset();
                Some(Effect::Reload)
            }
            ModalFormOutcome::Rerender(html) => {
                self.phase = ModalPhase::Ready;
                self.show(html);
                None
            }
        }
    }

    /// Transport failure, non-2xx status or unreadable body
    ///
    /// Shown inline; whatever content is on screen stays.
    pub fn failed(&mut self, generation: Generation, message: impl Into<String>) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.phase {
            ModalPhase::Loading | ModalPhase::Submitting => {
                self.phase = ModalPhase::Ready;
                self.error = Some(message.into());
                true
            }
            _ => false,
        }
    }

    /// Close without saving; anything still in flight becomes stale
    pub fn close(&mut self) {
        if self.is_open() {
            self.generation += 1;
        }
        self.reset();
    }

    fn show(&mut self, html: String) {
        self.content = Some(html);
        self.revision += 1;
        self.error = None;
    }

    fn reset(&mut self) {
        self.phase = ModalPhase::Closed;
        self.url = None;
        self.clear_content();
        self.error = None;
    }

    fn clear_content(&mut self) {
        self.content = None;
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EDIT_URL: &str = "/api/guinea_pig/edit/3";

    fn open_and_load(c: &mut ModalFormController, url: &str, html: &str) -> Generation {
        let Effect::Fetch { generation, .. } = c.open(url) else {
            panic!("open must fetch");
        };
        assert!(c.loaded(generation, Ok(html.to_string())));
        generation
    }

    fn post_generation(effect: Option<Effect>) -> Generation {
        match effect {
            Some(Effect::Post { generation, .. }) => generation,
            other => panic!("expected a post, got {:?}", other),
        }
    }

    #[test]
    fn test_click_issues_one_get_and_shows_response() {
        let mut c = ModalFormController::new();
        let effect = c.open(EDIT_URL);
        assert_eq!(
            effect,
            Effect::Fetch {
                url: EDIT_URL.into(),
                generation: 1
            }
        );
        assert_eq!(c.phase(), ModalPhase::Loading);
        assert!(c.is_open());
        assert_eq!(c.content(), None);

        assert!(c.loaded(1, Ok("<form>name</form>".into())));
        assert_eq!(c.content(), Some("<form>name</form>"));
        assert_eq!(c.submit_target(), Some(EDIT_URL));
    }

    #[test]
    fn test_each_click_is_its_own_get() {
        let mut c = ModalFormController::new();
        let first = c.open("/api/food_entry/add");
        let second = c.open("/api/weight_entry/add");
        assert_ne!(first, second);
        assert_eq!(c.generation(), 2);
    }

    #[test]
    fn test_ok_closes_and_reloads() {
        let mut c = ModalFormController::new();
        let g = open_and_load(&mut c, EDIT_URL, "<form></form>");
        let post = c.submit("name=Popcorn".into());
        assert_eq!(
            post,
            Some(Effect::Post {
                url: EDIT_URL.into(),
                body: "name=Popcorn".into(),
                generation: g
            })
        );
        assert_eq!(c.responded(g, ModalFormOutcome::Saved), Some(Effect::Reload));
        assert!(!c.is_open());
        assert_eq!(c.content(), None);
    }

    #[test]
    fn test_validation_failure_cycles_in_place() {
        let mut c = ModalFormController::new();
        let g = open_and_load(&mut c, EDIT_URL, "<form></form>");

        for round in 0..3 {
            let post_g = post_generation(c.submit("name=".into()));
            assert_eq!(post_g, g);
            let html = format!("<form>This field is required. {}</form>", round);
            assert_eq!(c.responded(g, ModalFormOutcome::Rerender(html.clone())), None);
            assert!(c.is_open());
            assert_eq!(c.content(), Some(html.as_str()));
            // still bound to the same action, exactly one target
            assert_eq!(c.submit_target(), Some(EDIT_URL));
        }

        c.submit("name=Popcorn".into());
        assert_eq!(c.responded(g, ModalFormOutcome::Saved), Some(Effect::Reload));
    }

    #[test]
    fn test_identical_rerender_is_a_new_revision() {
        let mut c = ModalFormController::new();
        let g = open_and_load(&mut c, EDIT_URL, "<form>required</form>");
        let loaded = c.revision();

        c.submit("name=".into());
        c.responded(g, ModalFormOutcome::Rerender("<form>required</form>".into()));
        assert_eq!(c.content(), Some("<form>required</form>"));
        assert_eq!(c.revision(), loaded + 1);

        // a failure keeps the fragment and its revision
        c.submit("name=".into());
        assert!(c.failed(g, "offline"));
        assert_eq!(c.revision(), loaded + 1);
    }

    #[test]
    fn test_submit_while_posting_is_ignored() {
        let mut c = ModalFormController::new();
        open_and_load(&mut c, EDIT_URL, "<form></form>");
        assert!(c.submit("name=a".into()).is_some());
        assert_eq!(c.submit("name=a".into()), None);
        assert_eq!(c.phase(), ModalPhase::Submitting);
    }

    #[test]
    fn test_submit_without_form_is_ignored() {
        let mut c = ModalFormController::new();
        assert_eq!(c.submit("x=1".into()), None);
        let Effect::Fetch { generation, .. } = c.open(EDIT_URL) else {
            unreachable!()
        };
        assert_eq!(c.submit("x=1".into()), None);
        assert!(c.loaded(generation, Err("Request failed: 404".into())));
        assert_eq!(c.submit("x=1".into()), None);
    }

    #[test]
    fn test_stale_get_is_discarded() {
        let mut c = ModalFormController::new();
        c.open("/api/guinea_pig/add");
        c.open(EDIT_URL);
        assert!(!c.loaded(1, Ok("<form>old</form>".into())));
        assert_eq!(c.content(), None);
        assert!(c.loaded(2, Ok("<form>new</form>".into())));
        assert_eq!(c.content(), Some("<form>new</form>"));
    }

    #[test]
    fn test_close_makes_pending_replies_stale() {
        let mut c = ModalFormController::new();
        let g = open_and_load(&mut c, EDIT_URL, "<form></form>");
        c.submit("name=a".into());
        c.close();
        assert_eq!(c.responded(g, ModalFormOutcome::Saved), None);
        assert!(!c.failed(g, "network down"));
        assert!(!c.is_open());

        let Effect::Fetch { generation, .. } = c.open(EDIT_URL) else {
            unreachable!()
        };
        c.close();
        assert!(!c.loaded(generation, Ok("<form></form>".into())));
    }

    #[test]
    fn test_reopen_drops_old_post_reply() {
        let mut c = ModalFormController::new();
        let g = open_and_load(&mut c, EDIT_URL, "<form></form>");
        c.submit("name=a".into());
        open_and_load(&mut c, "/api/food_type/add", "<form>food</form>");
        assert_eq!(c.responded(g, ModalFormOutcome::Saved), None);
        assert_eq!(c.content(), Some("<form>food</form>"));
    }

    #[test]
    fn test_failures_never_reload() {
        let mut c = ModalFormController::new();
        let Effect::Fetch { generation, .. } = c.open(EDIT_URL) else {
            unreachable!()
        };
        assert!(c.failed(generation, "Failed to send request"));
        assert!(c.is_open());
        assert_eq!(c.content(), None);
        assert_eq!(c.error(), Some("Failed to send request"));

        let g = open_and_load(&mut c, EDIT_URL, "<form>kept</form>");
        c.submit("name=a".into());
        assert!(c.failed(g, "Request failed: 500"));
        assert_eq!(c.content(), Some("<form>kept</form>"));
        assert_eq!(c.error(), Some("Request failed: 500"));
        // the form stays usable after a failed post
        assert!(c.submit("name=a".into()).is_some());
        assert_eq!(
            c.responded(g, ModalFormOutcome::Rerender("<form>again</form>".into())),
            None
        );
        assert_eq!(c.error(), None);
    }
}
