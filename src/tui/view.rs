//! Pure rendering: map App state to ratatui widget trees.
//!
//! Every panel of the page is always visible; focus only changes border
//! and cursor styles. Widget-building functions are pure (state in,
//! widgets out); the only effect is Frame::render_widget() which writes
//! to the terminal buffer.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Tabs as TabStrip, Wrap};
use ratatui::Frame;

use crate::config::PageConfig;
use crate::form::FormMessage;
use crate::types::{Field, Theme};

use super::state::{App, Page, Section};
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole page to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let page = &app.page;
    let area = frame.area();

    frame.render_widget(Block::new().style(theme::base(page.theme)), area);

    // Common layout: title bar at top, panels in middle, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(1),  // title
        Constraint::Length(5),  // theme + game
        Constraint::Min(5),     // faq
        Constraint::Length(6),  // tabs
        Constraint::Length(11), // form
        Constraint::Length(1),  // help
    ])
    .split(area);

    frame.render_widget(render_title(page.theme), chunks[0]);

    let top = Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[1]);
    render_theme_panel(page, frame, top[0]);
    render_game_panel(page, frame, top[1]);
    render_faq_panel(page, &app.config, frame, chunks[2]);
    render_tabs_panel(page, &app.config, frame, chunks[3]);
    render_form_panel(page, frame, chunks[4]);

    frame.render_widget(render_help(page.section), chunks[5]);

    if let Some(notice) = &page.notice {
        render_notice(notice, page.theme, frame, area);
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title(current: Theme) -> Paragraph<'static> {
    let mode = match current {
        Theme::Light => "light mode",
        Theme::Dark => "dark mode",
    };
    Paragraph::new(Line::from(vec![
        Span::styled(" Interactive Page", theme::STYLE_TITLE),
        Span::styled(format!("  ({})", mode), theme::STYLE_DIM),
    ]))
}

/// Help line showing available keybindings for the focused panel.
fn render_help(section: Section) -> Paragraph<'static> {
    let help_text = match section {
        Section::Theme => "[Enter] toggle  [Tab] next panel  [t] theme  [q] quit",
        Section::Game => "[s] start  [Space] click  [Tab] next panel  [t] theme  [q] quit",
        Section::Faq => "[j/k] move  [Enter] open/close  [Tab] next panel  [q] quit",
        Section::Tabs => "[h/l] switch  [1-9] jump  [Tab] next panel  [q] quit",
        Section::Form => "[Tab] next field  [Enter] submit  [Esc] leave form  ^C quit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

fn panel(title: &'static str, page: &Page, section: Section) -> Block<'static> {
    Block::bordered()
        .title(format!(" {} ", title))
        .border_style(theme::border(page.theme, page.section == section))
}

/// Button label: bright when enabled, dim when disabled.
fn button(label: &str, enabled: bool) -> Span<'static> {
    let style = if enabled {
        theme::STYLE_BUTTON
    } else {
        theme::STYLE_DIM
    };
    Span::styled(format!("[ {} ]", label), style)
}

// ============================================================================
// PANEL: THEME
// ============================================================================

fn render_theme_panel(page: &Page, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![Span::raw(" "), button(page.theme.button_label(), true)]),
    ];
    let paragraph = Paragraph::new(lines).block(panel("Theme", page, Section::Theme));
    frame.render_widget(paragraph, area);
}

// ============================================================================
// PANEL: GAME
// ============================================================================

fn render_game_panel(page: &Page, frame: &mut Frame, area: Rect) {
    let game = &page.game;
    let lines = vec![
        Line::from(vec![
            Span::raw(" Score: "),
            Span::styled(game.score.to_string(), theme::STYLE_IMPORTANT),
            Span::raw("   Time left: "),
            Span::styled(format!("{}s", game.seconds_remaining), theme::STYLE_IMPORTANT),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw(" "),
            button("Start Game", game.start_enabled()),
            Span::raw("  "),
            button("Click Me!", game.click_enabled()),
        ]),
    ];
    let paragraph = Paragraph::new(lines).block(panel("Click Challenge", page, Section::Game));
    frame.render_widget(paragraph, area);
}

// ============================================================================
// PANEL: FAQ
// ============================================================================

fn render_faq_panel(page: &Page, config: &PageConfig, frame: &mut Frame, area: Rect) {
    let focused = page.section == Section::Faq;
    let mut lines = Vec::new();

    for (i, entry) in config.faq.iter().enumerate() {
        let open = page.faq.is_open(i);
        let marker = if open { "▾" } else { "▸" };
        let style = if focused && i == page.faq_cursor {
            theme::STYLE_CURSOR
        } else {
            theme::STYLE_IMPORTANT
        };
        lines.push(Line::from(Span::styled(
            format!(" {} {}", marker, entry.question),
            style,
        )));
        if open {
            lines.push(Line::from(format!("     {}", entry.answer)));
        }
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(" No questions.", theme::STYLE_DIM)));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel("FAQ", page, Section::Faq));
    frame.render_widget(paragraph, area);
}

// ============================================================================
// PANEL: TABS
// ============================================================================

fn render_tabs_panel(page: &Page, config: &PageConfig, frame: &mut Frame, area: Rect) {
    let block = panel("Tabs", page, Section::Tabs);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(inner);

    let titles: Vec<String> = config.tabs.iter().map(|t| t.title.clone()).collect();
    let strip = TabStrip::new(titles)
        .select(page.tabs.active())
        .style(theme::STYLE_DIM)
        .highlight_style(theme::STYLE_ACTIVE_TAB);
    frame.render_widget(strip, rows[0]);

    let body = config
        .tabs
        .get(page.tabs.active())
        .map(|t| t.body.as_str())
        .unwrap_or("");
    let paragraph = Paragraph::new(format!(" {}", body)).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, rows[1]);
}

// ============================================================================
// PANEL: FORM
// ============================================================================

fn render_form_panel(page: &Page, frame: &mut Frame, area: Rect) {
    let form = &page.form;
    let editing = page.section == Section::Form;
    let width = Field::ALL.iter().map(|f| f.label().len()).max().unwrap_or(0);
    let mut lines = Vec::new();

    for field in Field::ALL {
        let slot = form.field(field);
        let shown = if field.is_secret() {
            "•".repeat(slot.raw_value.chars().count())
        } else {
            slot.raw_value.clone()
        };
        let is_cursor = editing && form.focused == field;
        let value = if is_cursor {
            Span::styled(format!("{}_", shown), theme::STYLE_CURSOR)
        } else {
            Span::raw(shown)
        };
        lines.push(Line::from(vec![
            Span::raw(format!(" {:<width$}  ", field.label(), width = width)),
            value,
        ]));
        lines.push(Line::from(Span::styled(
            format!(" {:<width$}  {}", "", slot.error_message(), width = width),
            theme::STYLE_DANGER,
        )));
    }

    if let Some(message) = form.message {
        let style = match message {
            FormMessage::Success => theme::STYLE_SAFE,
            FormMessage::FixErrors => theme::STYLE_DANGER,
        };
        lines.push(Line::from(Span::styled(format!(" {}", message.text()), style)));
    }

    let paragraph = Paragraph::new(lines).block(panel("Sign Up", page, Section::Form));
    frame.render_widget(paragraph, area);
}

// ============================================================================
// NOTICE
// ============================================================================

fn render_notice(notice: &str, page_theme: Theme, frame: &mut Frame, area: Rect) {
    let popup = centered(area, 40, 5);
    frame.render_widget(Clear, popup);
    let lines = vec![
        Line::from(Span::styled(format!(" {}", notice), theme::STYLE_IMPORTANT)),
        Line::from(""),
        Line::from(Span::styled(" press any key", theme::STYLE_HELP)),
    ];
    let paragraph = Paragraph::new(lines).block(
        Block::bordered()
            .style(theme::base(page_theme))
            .border_style(theme::STYLE_INTERACTIVE),
    );
    frame.render_widget(paragraph, popup);
}

/// A `width` x `height` rectangle centered in `area`, clipped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

// ============================================================================
// TESTS
// ============================================================================
