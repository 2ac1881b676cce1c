//! Terminal styling for toasts, draft listings and batch progress
//!
//! Every styled value carries a [`Tone`]. Whether color is emitted is decided
//! per output stream by `owo-colors` (`NO_COLOR`, `CLICOLOR`,
//! `CLICOLOR_FORCE` and TTY detection).

use grants_admin::report::Variant;
use indicatif::ProgressStyle;
use owo_colors::{OwoColorize, Stream, Style};
use std::fmt::{self, Display};
use std::sync::OnceLock;

/// Semantic color of a piece of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Project names, routes
    Accent,
    /// Created milestones, success toasts
    Success,
    /// Failed milestones, destructive toasts
    Error,
    /// Incomplete drafts
    Warn,
    /// Hints, ids, empty fields
    Muted,
    /// Headers and toast titles
    Emphasis,
}

impl Tone {
    const fn style(self) -> Style {
        match self {
            Self::Accent => Style::new().cyan(),
            Self::Success => Style::new().green(),
            Self::Error => Style::new().red(),
            Self::Warn => Style::new().yellow(),
            Self::Muted => Style::new().dimmed(),
            Self::Emphasis => Style::new().bold(),
        }
    }

    const fn default_stream(self) -> Stream {
        match self {
            Self::Error | Self::Warn => Stream::Stderr,
            _ => Stream::Stdout,
        }
    }
}

/// A value rendered with a tone for a given stream
#[derive(Clone, Debug)]
pub struct Styled<T> {
    value: T,
    tone: Tone,
    stream: Stream,
}

impl<T> Styled<T> {
    const fn new(value: T, tone: Tone) -> Self {
        Self {
            value,
            tone,
            stream: tone.default_stream(),
        }
    }

    /// Detect color support against stderr
    #[must_use]
    pub const fn for_stderr(mut self) -> Self {
        self.stream = Stream::Stderr;
        self
    }

    /// Detect color support against stdout
    #[must_use]
    pub const fn for_stdout(mut self) -> Self {
        self.stream = Stream::Stdout;
        self
    }
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = self.tone.style();
        write!(
            f,
            "{}",
            self.value.if_supports_color(self.stream, |v| v.style(style))
        )
    }
}

/// Tone shorthands for anything displayable
///
/// `error` and `warn` target stderr by default, the rest stdout.
pub trait Stylize: Display {
    /// Apply an arbitrary tone
    fn tone(&self, tone: Tone) -> Styled<&Self> {
        Styled::new(self, tone)
    }

    /// Cyan
    fn accent(&self) -> Styled<&Self> {
        self.tone(Tone::Accent)
    }

    /// Green
    fn success(&self) -> Styled<&Self> {
        self.tone(Tone::Success)
    }

    /// Red
    fn error(&self) -> Styled<&Self> {
        self.tone(Tone::Error)
    }

    /// Yellow
    fn warn(&self) -> Styled<&Self> {
        self.tone(Tone::Warn)
    }

    /// Dim
    fn muted(&self) -> Styled<&Self> {
        self.tone(Tone::Muted)
    }

    /// Bold
    fn emphasis(&self) -> Styled<&Self> {
        self.tone(Tone::Emphasis)
    }
}

impl<T: Display + ?Sized> Stylize for T {}

/// Created milestone, success toast
pub const fn check() -> Styled<&'static str> {
    Styled::new("✓", Tone::Success)
}

/// Failed milestone, destructive toast
pub const fn cross() -> Styled<&'static str> {
    Styled::new("✗", Tone::Error)
}

/// Navigation to a route
pub const fn arrow() -> Styled<&'static str> {
    Styled::new("→", Tone::Accent)
}

/// Draft list entry
pub const fn bullet() -> Styled<&'static str> {
    Styled::new("○", Tone::Muted)
}

/// Leading icon of a toast
pub const fn toast_icon(variant: Variant) -> Styled<&'static str> {
    match variant {
        Variant::Default => check(),
        Variant::Destructive => cross(),
    }
}

/// Spinner shown while a milestone batch is in flight
pub fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template("{spinner:.cyan} {msg} {elapsed:.dim}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⣾⣽⣻⢿⡿⣟⣯⣷ ")
        })
        .clone()
}
