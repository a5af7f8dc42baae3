//! UI controller: form, submit button, result view and card in one context.
//!
//! ```text
//! Idle --submit--> Submitting --ok--> Success --submit--> Submitting ...
//!                             \-err-> Failed  --submit--> Submitting ...
//! ```
//!
//! `Success` and `Failed` are idle states that remember the last outcome; the
//! submit button is enabled in all three.

use crate::card::{self, Canvas, ExportPng};
use crate::client::AnalysisApi;
use crate::error::{Result, WrappedError};
use crate::identifier::{parse_identifier, QueryParams};
use crate::list::{self, ListView};
use crate::model::AnalysisResult;
use crate::share::build_share_link;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Submit button label while idle.
pub const SUBMIT_LABEL: &str = "Get my Wrapped";
/// Submit button label while a request is in flight.
pub const BUSY_LABEL: &str = "Wrapping…";
/// File name used by the download action.
pub const DOWNLOAD_FILE_NAME: &str = "research-wrapped.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Success,
    Failed,
}

/// User-editable inputs.
#[derive(Debug, Clone, Default)]
pub struct Form {
    pub identifier: String,
    pub backend_url: String,
}

#[derive(Debug, Clone)]
pub struct SubmitButton {
    label: String,
    enabled: bool,
}

impl SubmitButton {
    fn idle() -> Self {
        Self {
            label: SUBMIT_LABEL.to_string(),
            enabled: true,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Everything shown once a result arrives.
#[derive(Debug, Clone, Default)]
pub struct ResultView {
    pub words: ListView,
    pub verbs: ListView,
    pub topics: ListView,
    pub share_link: Option<String>,
    visible: bool,
}

impl ResultView {
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

pub struct Controller<A, C> {
    api: A,
    pub form: Form,
    button: SubmitButton,
    view: ResultView,
    canvas: C,
    card_drawn: bool,
    phase: Phase,
    alert: Option<String>,
    error_message: Option<String>,
    result: Option<AnalysisResult>,
}

impl<A, C> Controller<A, C> {
    pub fn new(api: A, canvas: C) -> Self {
        Self {
            api,
            form: Form::default(),
            button: SubmitButton::idle(),
            view: ResultView::default(),
            canvas,
            card_drawn: false,
            phase: Phase::Idle,
            alert: None,
            error_message: None,
            result: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    pub fn view(&self) -> &ResultView {
        &self.view
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Blocking alert raised by the last rejected submit.
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Inline error from the last failed request.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Result currently on display.
    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn card_drawn(&self) -> bool {
        self.card_drawn
    }
}

impl<A, C: Canvas> Controller<A, C> {
    /// Validate the form and enter `Submitting`.
    ///
    /// On a validation failure the phase is unchanged and an alert is raised.
    pub fn begin_submit(&mut self) -> Result<QueryParams> {
        if self.phase == Phase::Submitting {
            return Err(WrappedError::Validation(
                "A request is already in progress".to_string(),
            ));
        }

        self.alert = None;
        let backend = self.form.backend_url.trim();
        let params = parse_identifier(&self.form.identifier);
        if params.is_empty() || backend.is_empty() {
            let message = "Please enter both a researcher ID and the backend URL.".to_string();
            warn!(
                identifier_empty = params.is_empty(),
                backend_empty = backend.is_empty(),
                "Submit blocked"
            );
            self.alert = Some(message.clone());
            return Err(WrappedError::Validation(message));
        }

        self.error_message = None;
        self.phase = Phase::Submitting;
        self.button.enabled = false;
        self.button.label = BUSY_LABEL.to_string();
        info!(params = %params, backend, "Submitting");
        Ok(params)
    }

    /// Apply the outcome of a request and return to an idle state.
    pub fn finish_submit(&mut self, outcome: Result<AnalysisResult>) -> Phase {
        match outcome {
            Ok(result) => {
                list::render(&mut self.view.words, &result.top_words);
                list::render(&mut self.view.verbs, &result.top_verbs);
                list::render(&mut self.view.topics, &result.topics);
                card::draw(&mut self.canvas, &result);
                self.card_drawn = true;
                self.view.share_link = Some(build_share_link(&result));
                self.view.visible = true;
                info!(author = result.display_name(), "Wrapped card ready");
                self.result = Some(result);
                self.phase = Phase::Success;
            }
            Err(e) => {
                warn!(error = %e, "Analysis failed");
                self.error_message = Some(e.to_string());
                self.result = None;
                self.view.visible = false;
                self.phase = Phase::Failed;
            }
        }

        self.button = SubmitButton::idle();
        self.phase
    }
}

impl<A: AnalysisApi, C: Canvas> Controller<A, C> {
    /// Run a full submit: validate, fetch, render.
    pub async fn submit(&mut self) -> Result<Phase> {
        let params = self.begin_submit()?;
        let outcome = self.api.analyze(&self.form.backend_url, &params).await;
        Ok(self.finish_submit(outcome))
    }
}

impl<A, C: Canvas + ExportPng> Controller<A, C> {
    /// The card's current pixels as PNG; requires a card to have been drawn.
    pub fn card_png(&self) -> Result<Vec<u8>> {
        if !self.card_drawn {
            return Err(WrappedError::Validation(
                "No card has been drawn yet".to_string(),
            ));
        }
        self.canvas.encode_png()
    }

    /// Save the card as `research-wrapped.png` inside `dir`.
    pub fn download(&self, dir: &Path) -> Result<PathBuf> {
        let png = self.card_png()?;
        std::fs::create_dir_all(dir)?;
        let path = dir.join(DOWNLOAD_FILE_NAME);
        std::fs::write(&path, png)?;
        info!(path = %path.display(), "Card saved");
        Ok(path)
    }
}
