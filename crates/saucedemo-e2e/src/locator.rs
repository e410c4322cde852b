//! Locator abstraction for element selection and interaction.
//!
//! A [`Locator`] is lazy: it carries a selector chain, not elements.
//! Resolution happens inside a single JavaScript evaluation at the moment
//! an action or query runs, so it always reflects current page state.
//! Single-target actions are strict and auto-wait: more than one match
//! fails immediately, zero matches is polled until the wait budget lapses.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use tokio::time::{sleep, Instant};

use crate::result::{SuiteError, SuiteResult};
use crate::session::Session;

/// Default timeout for auto-waiting (5 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Default polling interval for auto-waiting (50ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Accessible roles the suite queries by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Buttons, including `input[type=submit]`
    Button,
    /// Anchor links
    Link,
}

impl Role {
    /// CSS approximation of the role's element set.
    const fn css(self) -> &'static str {
        match self {
            Self::Button => {
                "button, input[type=\"button\"], input[type=\"submit\"], [role=\"button\"]"
            }
            Self::Link => "a[href], [role=\"link\"]",
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Link => "link",
        }
    }
}

/// One step in a selector chain.
///
/// Find steps expand the current element set by searching inside it;
/// the filter step narrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// CSS selector (e.g. ".inventory_item")
    Css(String),
    /// Test identifier (`data-test` attribute)
    TestId(String),
    /// Placeholder text on inputs/textareas (exact match)
    Placeholder(String),
    /// Accessible role with case-insensitive substring name match
    Role {
        /// Role to search for
        role: Role,
        /// Name fragment, matched case-insensitively
        name: String,
    },
    /// Keep only elements whose text contains the needle
    HasText(String),
}

impl Step {
    fn to_js(&self) -> String {
        match self {
            Self::Css(css) => format!(
                "  set = dedup(set.flatMap((root) => Array.from(root.querySelectorAll({}))));\n",
                js_str(css)
            ),
            Self::TestId(id) => format!(
                "  set = dedup(set.flatMap((root) => Array.from(root.querySelectorAll({}))));\n",
                js_str(&format!("[data-test=\"{id}\"]"))
            ),
            Self::Placeholder(text) => format!(
                "  set = dedup(set.flatMap((root) => Array.from(root.querySelectorAll({}))));\n",
                js_str(&format!(
                    "input[placeholder=\"{text}\"], textarea[placeholder=\"{text}\"]"
                ))
            ),
            Self::Role { role, name } => format!(
                "  set = dedup(set.flatMap((root) => Array.from(root.querySelectorAll({}))\
                 .filter((el) => accName(el).toLowerCase().includes({}))));\n",
                js_str(role.css()),
                js_str(&name.to_lowercase())
            ),
            Self::HasText(text) => format!(
                "  set = set.filter((el) => textOf(el).includes({}));\n",
                js_str(text)
            ),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Css(css) => write!(f, "css={css}"),
            Self::TestId(id) => write!(f, "test-id={id}"),
            Self::Placeholder(text) => write!(f, "placeholder={text}"),
            Self::Role { role, name } => write!(f, "role={}[name~\"{name}\"]", role.as_str()),
            Self::HasText(text) => write!(f, "has-text=\"{text}\""),
        }
    }
}

/// A declarative selector chain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    steps: Vec<Step>,
}

impl Selector {
    /// CSS selector chain root
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self {
            steps: vec![Step::Css(selector.into())],
        }
    }

    /// Test-id (`data-test`) chain root
    #[must_use]
    pub fn test_id(id: impl Into<String>) -> Self {
        Self {
            steps: vec![Step::TestId(id.into())],
        }
    }

    /// Placeholder-text chain root
    #[must_use]
    pub fn placeholder(text: impl Into<String>) -> Self {
        Self {
            steps: vec![Step::Placeholder(text.into())],
        }
    }

    /// Role + name chain root
    #[must_use]
    pub fn role(role: Role, name: impl Into<String>) -> Self {
        Self {
            steps: vec![Step::Role {
                role,
                name: name.into(),
            }],
        }
    }

    /// Append a step to the chain
    #[must_use]
    pub fn then(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// The chain's steps
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for step in &self.steps {
            if !first {
                write!(f, " >> ")?;
            }
            write!(f, "{step}")?;
            first = false;
        }
        Ok(())
    }
}

/// Locator wait options
#[derive(Debug, Clone)]
pub struct LocatorOptions {
    /// Auto-wait budget for single-target actions
    pub timeout: Duration,
    /// Polling interval while waiting
    pub poll_interval: Duration,
}

impl Default for LocatorOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

/// Result of one resolve-and-act evaluation inside the page.
#[derive(Debug, Deserialize)]
struct Outcome {
    n: usize,
    #[serde(default)]
    text: Option<String>,
}

enum SingleAction<'a> {
    Click,
    Fill(&'a str),
    SelectOption(&'a str),
    ReadText,
}

impl SingleAction<'_> {
    const fn name(&self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Fill(_) => "fill",
            Self::SelectOption(_) => "select_option",
            Self::ReadText => "text_content",
        }
    }

    fn to_js(&self) -> String {
        match self {
            Self::Click => String::from("  el.click();\n"),
            // Set the value through the native setter so the page's
            // framework sees the input event (plain `.value =` is
            // invisible to React's change tracking).
            Self::Fill(text) => format!(
                "  const proto = el.tagName === 'TEXTAREA' \
                 ? HTMLTextAreaElement.prototype : HTMLInputElement.prototype;\n\
                 \x20 Object.getOwnPropertyDescriptor(proto, 'value').set.call(el, {});\n\
                 \x20 el.dispatchEvent(new Event('input', {{ bubbles: true }}));\n\
                 \x20 el.dispatchEvent(new Event('change', {{ bubbles: true }}));\n",
                js_str(text)
            ),
            Self::SelectOption(value) => format!(
                "  Object.getOwnPropertyDescriptor(HTMLSelectElement.prototype, 'value')\
                 .set.call(el, {});\n\
                 \x20 el.dispatchEvent(new Event('change', {{ bubbles: true }}));\n",
                js_str(value)
            ),
            Self::ReadText => String::new(),
        }
    }
}

/// A lazily-resolved reference to page elements.
#[derive(Debug, Clone)]
pub struct Locator {
    session: Session,
    selector: Selector,
    options: LocatorOptions,
}

impl Locator {
    /// Create a locator against a session.
    #[must_use]
    pub fn new(session: Session, selector: Selector) -> Self {
        Self {
            session,
            selector,
            options: LocatorOptions::default(),
        }
    }

    /// Derive a locator that searches by CSS inside the current matches.
    #[must_use]
    pub fn locator(&self, css: impl Into<String>) -> Self {
        self.derive(Step::Css(css.into()))
    }

    /// Derive a locator filtered to matches whose text contains `text`.
    #[must_use]
    pub fn filter_has_text(&self, text: impl Into<String>) -> Self {
        self.derive(Step::HasText(text.into()))
    }

    /// Derive a locator that searches by role + name inside the current
    /// matches.
    #[must_use]
    pub fn get_by_role(&self, role: Role, name: impl Into<String>) -> Self {
        self.derive(Step::Role {
            role,
            name: name.into(),
        })
    }

    /// Override the auto-wait budget.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = timeout;
        self
    }

    /// The selector chain.
    #[must_use]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Click the single matching element.
    pub async fn click(&self) -> SuiteResult<()> {
        self.perform(SingleAction::Click).await.map(|_| ())
    }

    /// Fill the single matching input with text.
    pub async fn fill(&self, text: &str) -> SuiteResult<()> {
        self.perform(SingleAction::Fill(text)).await.map(|_| ())
    }

    /// Select an option by value on the single matching `<select>`.
    pub async fn select_option(&self, value: &str) -> SuiteResult<()> {
        self.perform(SingleAction::SelectOption(value))
            .await
            .map(|_| ())
    }

    /// Text content of the single matching element.
    pub async fn text_content(&self) -> SuiteResult<String> {
        let text = self.perform(SingleAction::ReadText).await?;
        Ok(text.unwrap_or_default())
    }

    /// Number of elements currently matching. Never waits; zero is a
    /// valid answer, not an error.
    pub async fn count(&self) -> SuiteResult<usize> {
        self.session
            .evaluate(&self.compile_query("return set.length;"))
            .await
    }

    /// Text content of every current match, in document order.
    pub async fn all_text_contents(&self) -> SuiteResult<Vec<String>> {
        self.session
            .evaluate(&self.compile_query("return set.map(textOf);"))
            .await
    }

    /// Whether at least one match is currently visible.
    pub async fn is_visible(&self) -> SuiteResult<bool> {
        Ok(self.visible_count().await? > 0)
    }

    pub(crate) async fn visible_count(&self) -> SuiteResult<usize> {
        self.session
            .evaluate(&self.compile_query("return set.filter(isVisible).length;"))
            .await
    }

    fn derive(&self, step: Step) -> Self {
        Self {
            session: self.session.clone(),
            selector: self.selector.clone().then(step),
            options: self.options.clone(),
        }
    }

    /// Resolve-and-act loop: the whole script re-runs on every poll, so
    /// the element is located and acted on in one evaluation.
    async fn perform(&self, action: SingleAction<'_>) -> SuiteResult<Option<String>> {
        let script = self.compile_single(&action);
        tracing::debug!(selector = %self.selector, action = action.name(), "locator action");
        let deadline = Instant::now() + self.options.timeout;
        loop {
            match self.session.evaluate::<Outcome>(&script).await {
                Ok(outcome) => match outcome.n {
                    1 => return Ok(outcome.text),
                    0 => {}
                    n => {
                        return Err(SuiteError::AmbiguousMatch {
                            selector: self.selector.to_string(),
                            matches: n,
                        })
                    }
                },
                Err(e) => {
                    // Evaluation fails transiently while a navigation is
                    // in flight; keep polling as long as the session is
                    // alive.
                    if !self.session.is_live() {
                        return Err(e);
                    }
                }
            }
            if Instant::now() >= deadline {
                return Err(SuiteError::NotActionable {
                    selector: self.selector.to_string(),
                    timeout_ms: self.options.timeout.as_millis() as u64,
                });
            }
            sleep(self.options.poll_interval).await;
        }
    }

    fn compile_prelude(&self) -> String {
        let mut js = String::from("(() => {\n");
        js.push_str("  const textOf = (el) => (el.textContent || '').trim();\n");
        js.push_str(
            "  const accName = (el) => {\n\
             \x20   const aria = el.getAttribute('aria-label');\n\
             \x20   if (aria) return aria;\n\
             \x20   if (el.tagName === 'INPUT') return el.value || '';\n\
             \x20   return textOf(el);\n\
             \x20 };\n",
        );
        js.push_str(
            "  const isVisible = (el) => el.getClientRects().length > 0 \
             && getComputedStyle(el).visibility !== 'hidden';\n",
        );
        js.push_str("  const dedup = (els) => Array.from(new Set(els));\n");
        js.push_str("  let set = [document.documentElement];\n");
        for step in self.selector.steps() {
            js.push_str(&step.to_js());
        }
        js
    }

    fn compile_query(&self, ret: &str) -> String {
        let mut js = self.compile_prelude();
        js.push_str("  ");
        js.push_str(ret);
        js.push_str("\n})()");
        js
    }

    fn compile_single(&self, action: &SingleAction<'_>) -> String {
        let mut js = self.compile_prelude();
        js.push_str("  if (set.length > 1) return { n: set.length };\n");
        js.push_str("  if (set.length === 0) return { n: 0 };\n");
        js.push_str("  const el = set[0];\n");
        js.push_str("  if (!isVisible(el)) return { n: 0 };\n");
        js.push_str(&action.to_js());
        js.push_str("  return { n: 1, text: textOf(el) };\n})()");
        js
    }
}

/// Quote a Rust string as a JavaScript string literal.
fn js_str(s: &str) -> String {
    format!("{s:?}")
}
