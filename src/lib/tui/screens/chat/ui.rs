//! Chat UI rendering components

use super::state::ChatScreen;
use crate::application::{Surface, ViewNode};
use crate::domain::Role;
use crate::tui::chrome::{Focus, LayoutMode};
use crate::tui::theme;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

const LOADER_FRAMES: [&str; 3] = ["●  ", "●● ", "●●●"];

/// Width of the side panel in the wide layout
const PANEL_WIDTH: u16 = 48;

/// Main chat UI renderer
pub struct ChatUI;

impl ChatUI {
    /// Render the whole screen. Returns the maximum scroll offset of the
    /// message list so the runner can bound scrolling.
    pub fn render(frame: &mut Frame, surface: &Surface, screen: &ChatScreen, model: &str) -> u16 {
        let area = frame.area();
        let chrome = &screen.chrome;

        let panel = match chrome.layout() {
            LayoutMode::Compact => area,
            LayoutMode::Wide => {
                let chunks = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Min(10), Constraint::Length(PANEL_WIDTH)])
                    .split(area);
                Self::render_backdrop(frame, chunks[0], model);
                chunks[1]
            }
        };

        if !chrome.is_chat_visible() {
            if chrome.layout() == LayoutMode::Compact {
                Self::render_backdrop(frame, area, model);
            }
            Self::render_launcher(frame, area);
            return 0;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Messages
                Constraint::Length(3), // Input
                Constraint::Length(1), // Help bar
            ])
            .split(panel);

        Self::render_header(frame, chunks[0], screen, model);
        let max_scroll = Self::render_messages(frame, chunks[1], surface, screen);
        Self::render_input(frame, chunks[2], surface, screen);
        Self::render_help_bar(frame, chunks[3], surface, screen);

        if chrome.is_picker_open() {
            Self::render_emoji_picker(frame, chunks[1], screen);
        }
        max_scroll
    }

    /// Page content behind the widget
    fn render_backdrop(frame: &mut Frame, area: Rect, model: &str) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("  Gemini chat", theme::title())),
            Line::from(Span::styled(format!("  model: {}", model), theme::footer())),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Launcher button in the bottom-right corner
    fn render_launcher(frame: &mut Frame, area: Rect) {
        let label = " 💬 Chat (Enter) ";
        let width = (label.chars().count() as u16 + 1).min(area.width);
        let rect = Rect {
            x: area.x + area.width.saturating_sub(width),
            y: area.y + area.height.saturating_sub(1),
            width,
            height: 1.min(area.height),
        };
        frame.render_widget(Paragraph::new(Span::styled(label, theme::launcher())), rect);
    }

    fn render_header(frame: &mut Frame, area: Rect, screen: &ChatScreen, model: &str) {
        let mut spans = vec![
            Span::styled(" 💬 ", theme::title()),
            Span::styled("Chat ", theme::title()),
            Span::styled("│ ", theme::border()),
            Span::styled(model.to_string(), Style::default().fg(theme::HIGHLIGHT)),
        ];
        if let Some(status) = &screen.status_message {
            spans.push(Span::styled(format!(" │ {}", status), theme::footer()));
        }
        if screen.chrome.layout() == LayoutMode::Compact {
            spans.push(Span::styled("  [Esc ✕]", theme::key_hint()));
        }

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::border());
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    /// Render the conversation, returning the maximum scroll offset
    fn render_messages(frame: &mut Frame, area: Rect, surface: &Surface, screen: &ChatScreen) -> u16 {
        let inner_height = area.height.saturating_sub(1) as usize;
        let mut lines: Vec<Line> = Vec::new();

        for node in surface.view.nodes() {
            lines.extend(Self::node_lines(node, screen.loader_frame));
            lines.push(Line::from(""));
        }

        let max_scroll = lines.len().saturating_sub(inner_height) as u16;
        let scroll = if screen.scroll_offset == u16::MAX {
            max_scroll
        } else {
            screen.scroll_offset.min(max_scroll)
        };

        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(theme::border());
        let para = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        frame.render_widget(para, area);
        max_scroll
    }

    fn node_lines(node: &ViewNode, loader_frame: usize) -> Vec<Line<'static>> {
        let Some(role) = node.role() else {
            return vec![Line::from(Span::styled(
                format!(" {} ", LOADER_FRAMES[loader_frame % LOADER_FRAMES.len()]),
                theme::loading(),
            ))];
        };

        let (style, alignment) = match role {
            Role::User => (theme::user_bubble(), Alignment::Right),
            Role::Assistant => (theme::bot_bubble(), Alignment::Left),
        };

        let mut lines: Vec<Line> = node
            .text()
            .split('\n')
            .map(|line| Line::from(Span::styled(format!(" {} ", line), style)).alignment(alignment))
            .collect();
        lines.push(
            Line::from(Span::styled(
                node.created_at().format("%H:%M").to_string(),
                theme::timestamp(),
            ))
            .alignment(alignment),
        );
        lines
    }

    fn render_input(frame: &mut Frame, area: Rect, surface: &Surface, screen: &ChatScreen) {
        let input = &surface.input;
        let focused = screen.chrome.focus() == Focus::Input;

        let display = if !input.is_enabled() && input.is_empty() {
            "Waiting for response...".to_string()
        } else if input.is_empty() {
            "Type your message...".to_string()
        } else {
            let mut chars: Vec<char> = input.value().chars().map(|c| if c == '\n' { '↵' } else { c }).collect();
            if focused {
                if input.cursor_pos() >= chars.len() {
                    chars.push('_');
                } else {
                    chars.insert(input.cursor_pos(), '|');
                }
            }
            chars.into_iter().collect()
        };

        let text_style = if input.is_enabled() && !input.is_empty() {
            theme::text()
        } else {
            theme::disabled()
        };
        let send = Span::styled(
            " ➤ ",
            Style::default()
                .fg(screen.chrome.send_button().color())
                .add_modifier(Modifier::BOLD),
        );

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(5), Constraint::Length(5)])
            .split(area);

        let border = if input.is_enabled() && focused {
            theme::border_active()
        } else {
            theme::border()
        };
        let field = Paragraph::new(Line::from(vec![
            Span::styled("> ", theme::title()),
            Span::styled(display, text_style),
        ]))
        .block(Block::default().borders(Borders::ALL).border_style(border).title(" Message "));
        frame.render_widget(field, chunks[0]);

        let button = Paragraph::new(Line::from(send))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(theme::border()));
        frame.render_widget(button, chunks[1]);
    }

    fn render_emoji_picker(frame: &mut Frame, messages_area: Rect, screen: &ChatScreen) {
        let picker = screen.chrome.picker();
        let rows: Vec<&[&str]> = picker.rows().collect();
        let height = (rows.len() as u16 + 2).min(messages_area.height);
        let width = (picker.columns() as u16 * 3 + 2).min(messages_area.width);
        let area = Rect {
            x: messages_area.x + messages_area.width.saturating_sub(width),
            y: messages_area.y + messages_area.height.saturating_sub(height),
            width,
            height,
        };

        let selected = picker.selected_index();
        let picker_focused = screen.chrome.focus() == Focus::EmojiPicker;
        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .map(|(row, emojis)| {
                let spans: Vec<Span> = emojis
                    .iter()
                    .enumerate()
                    .map(|(col, emoji)| {
                        let index = row * picker.columns() + col;
                        if picker_focused && index == selected {
                            Span::styled(format!("{} ", emoji), theme::selected())
                        } else {
                            Span::raw(format!("{} ", emoji))
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        let border = if picker_focused {
            theme::border_active()
        } else {
            theme::border()
        };
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).border_style(border)),
            area,
        );
    }

    fn render_help_bar(frame: &mut Frame, area: Rect, surface: &Surface, screen: &ChatScreen) {
        let help = if !surface.input.is_enabled() {
            Line::from(Span::styled(" Waiting for reply... ", theme::loading()))
        } else if screen.chrome.focus() == Focus::EmojiPicker {
            Line::from(vec![
                Span::styled(" Arrows", theme::key_hint()),
                Span::raw(": Pick │ "),
                Span::styled("Enter", theme::key_hint()),
                Span::raw(": Insert │ "),
                Span::styled("Tab", theme::key_hint()),
                Span::raw(": Back "),
            ])
        } else {
            Line::from(vec![
                Span::styled(" Enter", theme::key_hint()),
                Span::raw(": Send │ "),
                Span::styled("Shift+Enter", theme::key_hint()),
                Span::raw(": Newline │ "),
                Span::styled("Ctrl+E", theme::key_hint()),
                Span::raw(": Emoji │ "),
                Span::styled("Ctrl+Q", theme::key_hint()),
                Span::raw(": Exit "),
            ])
        };
        frame.render_widget(Paragraph::new(help), area);
    }
}
