mod theme;

pub use theme::{Palette, palette};

use crate::app::{AppModel, LOGS, MENU_ENTRIES, SETTING_ROWS, SettingRow};
use crate::core::{ListCursor, scrollbar};
use ratatui::prelude::*;
use ratatui::widgets::*;
use time::OffsetDateTime;
use time::macros::format_description;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, model: &AppModel) {
    let full_area = frame.area();
    if full_area.width == 0 || full_area.height == 0 {
        return;
    }

    let colors = palette(model.settings.theme);
    frame.render_widget(
        Block::default().style(Style::default().bg(colors.bg).fg(colors.fg)),
        full_area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(full_area);

    render_menu_bar(frame, chunks[0], model, colors);

    match model.navigator.current() {
        LOGS => render_logs(frame, chunks[1], model, colors),
        crate::app::SETTINGS => render_settings(frame, chunks[1], model, colors),
        _ => render_home(frame, chunks[1], model, colors),
    }

    if model.help_open() {
        render_help_overlay(frame, chunks[1], colors);
    }

    render_footer(frame, chunks[2], model, colors);
}

fn render_help_overlay(frame: &mut Frame, area: Rect, colors: &Palette) {
    const ROWS: &[(&str, &str)] = &[
        ("↑/k  ↓/j", "Move selection"),
        ("PgUp PgDn", "Page"),
        ("g / Home", "Jump to start"),
        ("G / End", "Jump to end, re-engage follow"),
        ("/", "Search logs"),
        ("Enter", "Activate"),
        ("Esc / q", "Back (quit from Home)"),
        ("Ctrl+Q", "Quit from anywhere"),
    ];

    let key_width = ROWS
        .iter()
        .map(|(key, _)| UnicodeWidthStr::width(*key))
        .max()
        .unwrap_or(0);
    let popup_width = 46u16.min(area.width);
    let popup_height = (ROWS.len() as u16 + 2).min(area.height);
    let popup = Rect {
        x: area.x + area.width.saturating_sub(popup_width) / 2,
        y: area.y + area.height.saturating_sub(popup_height) / 2,
        width: popup_width,
        height: popup_height,
    };

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.accent))
        .padding(Padding::horizontal(1))
        .title("Help · F1/?/Esc to close");
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines: Vec<Line> = ROWS
        .iter()
        .map(|(key, what)| {
            let pad = key_width.saturating_sub(UnicodeWidthStr::width(*key)) + 2;
            Line::from(vec![
                Span::styled((*key).to_string(), Style::default().fg(colors.accent)),
                Span::raw(" ".repeat(pad)),
                Span::styled((*what).to_string(), Style::default().fg(colors.fg)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(colors.bar_bg)),
        inner,
    );
}

fn render_menu_bar(frame: &mut Frame, area: Rect, model: &AppModel, colors: &Palette) {
    let base_style = Style::default().fg(colors.fg).bg(colors.bar_bg);
    let title = format!(" opsdeck · {} ", view_title(model));
    let crumbs = if !model.arbiter.is_interactive() {
        "input disabled (no tty) ".to_string()
    } else if model.navigator.depth() > 0 {
        format!("Esc: back ({}) ", model.navigator.depth())
    } else {
        String::new()
    };

    let used = UnicodeWidthStr::width(title.as_str()) + UnicodeWidthStr::width(crumbs.as_str());
    let padding = (area.width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled(title, base_style.add_modifier(Modifier::BOLD)),
        Span::styled(" ".repeat(padding), base_style),
        Span::styled(crumbs, Style::default().fg(colors.muted).bg(colors.bar_bg)),
    ]);
    frame.render_widget(Paragraph::new(line).style(base_style), area);
}

fn view_title(model: &AppModel) -> &'static str {
    match model.navigator.current() {
        LOGS => "Logs",
        crate::app::SETTINGS => "Settings",
        _ => "Home",
    }
}

fn render_home(frame: &mut Frame, area: Rect, model: &AppModel, colors: &Palette) {
    let label_width = MENU_ENTRIES
        .iter()
        .map(|entry| UnicodeWidthStr::width(entry.label))
        .max()
        .unwrap_or(0);

    render_cursor_list(
        frame,
        area,
        colors,
        "Dashboard",
        &model.home.cursor,
        "Nothing to show.",
        |index| {
            let entry = &MENU_ENTRIES[index];
            let pad = label_width.saturating_sub(UnicodeWidthStr::width(entry.label)) + 2;
            Line::from(vec![
                Span::raw(entry.label.to_string()),
                Span::raw(" ".repeat(pad)),
                Span::styled(entry.hint.to_string(), Style::default().fg(colors.dim)),
            ])
        },
    );
}

fn render_settings(frame: &mut Frame, area: Rect, model: &AppModel, colors: &Palette) {
    render_cursor_list(
        frame,
        area,
        colors,
        "Settings",
        &model.settings_view.cursor,
        "Nothing to show.",
        |index| {
            let (label, value) = match SETTING_ROWS[index] {
                SettingRow::WrapAround => ("Wrap-around selection", on_off(model.settings.wrap_around)),
                SettingRow::FollowLogs => ("Follow latest log line", on_off(model.settings.follow_logs)),
                SettingRow::Theme => ("Theme", model.settings.theme.label()),
            };
            let pad = 28usize.saturating_sub(UnicodeWidthStr::width(label)) + 2;
            Line::from(vec![
                Span::raw(label.to_string()),
                Span::raw(" ".repeat(pad)),
                Span::styled(
                    format!("‹ {value} ›"),
                    Style::default().fg(colors.accent),
                ),
            ])
        },
    );
}

fn on_off(value: bool) -> &'static str {
    if value { "On" } else { "Off" }
}

fn render_logs(frame: &mut Frame, area: Rect, model: &AppModel, colors: &Palette) {
    let logs = &model.logs;
    let mut list_area = area;

    if let Some(state) = &logs.search {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);
        list_area = chunks[1];

        let query = state.field.text();
        let search_text = if query.is_empty() {
            Text::from(Line::from(Span::styled(
                "Type to filter log lines…",
                Style::default().fg(colors.dim),
            )))
        } else {
            Text::from(query.as_str())
        };
        let search = Paragraph::new(search_text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.accent))
                .padding(Padding::horizontal(1))
                .title("Search Logs"),
        );
        frame.render_widget(search, chunks[0]);
        // Borders plus padding take two columns on each side; keep the
        // cursor on the last writable column for queries wider than the box.
        let max_cursor = chunks[0].width.saturating_sub(5) as usize;
        frame.set_cursor_position((
            chunks[0].x + 2 + state.field.cursor().min(max_cursor) as u16,
            chunks[0].y + 1,
        ));
    }

    let mut title = match (&logs.applied_query, logs.search.is_some()) {
        (Some(query), _) => format!(
            "Logs · {}/{} · filter: {query}",
            logs.filtered_indices.len(),
            logs.lines.len()
        ),
        (None, true) => format!("Logs · {}/{}", logs.filtered_indices.len(), logs.lines.len()),
        (None, false) => format!("Logs · {}", logs.lines.len()),
    };
    if logs.cursor.is_following() {
        title.push_str(" · following");
    }

    let empty_message = if logs.source.is_none() {
        "No log file. Start opsdeck with a log path to tail it here."
    } else if logs.lines.is_empty() {
        "No log lines yet."
    } else {
        "No matching lines. Press Esc to clear the filter."
    };

    let max_width = (list_area.width as usize).saturating_sub(5);
    render_cursor_list(
        frame,
        list_area,
        colors,
        &title,
        &logs.cursor,
        empty_message,
        |index| {
            let line = logs
                .filtered_indices
                .get(index)
                .and_then(|line_index| logs.lines.get(*line_index))
                .map(|line| line.as_str())
                .unwrap_or("");
            Line::from(truncate_end(line, max_width))
        },
    );
}

/// Render one windowed, selectable list: bordered block, visible slice from
/// the cursor's window, highlighted selection, right-edge scrollbar.
fn render_cursor_list(
    frame: &mut Frame,
    area: Rect,
    colors: &Palette,
    title: &str,
    cursor: &ListCursor,
    empty_message: &str,
    render_item: impl Fn(usize) -> Line<'static>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .padding(Padding::horizontal(1))
        .title(title.to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if cursor.is_empty() {
        let empty = Paragraph::new(Span::styled(
            empty_message.to_string(),
            Style::default().fg(colors.dim),
        ));
        frame.render_widget(empty, inner);
        return;
    }

    let window = cursor.window();
    let selected = cursor.selected();
    let mut lines: Vec<Line> = Vec::with_capacity(window.end - window.start);
    for index in window.start..window.end {
        let mut line = render_item(index);
        if selected == Some(index) {
            line.spans.insert(0, Span::raw("▸ "));
            line = line.style(
                Style::default()
                    .fg(colors.accent)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            line.spans.insert(0, Span::raw("  "));
        }
        lines.push(line);
    }
    frame.render_widget(Paragraph::new(lines), inner);

    if let Some(bar) = scrollbar(cursor.len(), cursor.viewport_height(), cursor.scroll_offset()) {
        let track = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: inner.y,
            width: 1,
            height: inner.height,
        };
        let mut rail: Vec<Line> = Vec::with_capacity(track.height as usize);
        for row in 0..track.height as usize {
            let in_thumb = row >= bar.thumb_offset && row < bar.thumb_offset + bar.thumb_size;
            rail.push(Line::from(Span::styled(
                if in_thumb { "█" } else { "│" },
                Style::default().fg(if in_thumb { colors.accent } else { colors.dim }),
            )));
        }
        frame.render_widget(Paragraph::new(rail), track);
    }
}

fn render_footer(frame: &mut Frame, area: Rect, model: &AppModel, colors: &Palette) {
    let stamp_format = format_description!("[hour]:[minute]:[second]");
    let stamp = OffsetDateTime::now_utc()
        .format(&stamp_format)
        .unwrap_or_default();

    let (text, style) = match &model.notice {
        Some(notice) => (notice.clone(), Style::default().fg(colors.error)),
        None => (footer_hints(model).to_string(), Style::default().fg(colors.muted)),
    };

    let used = UnicodeWidthStr::width(text.as_str()) + UnicodeWidthStr::width(stamp.as_str());
    let padding = (area.width as usize).saturating_sub(used + 1);
    let line = Line::from(vec![
        Span::styled(truncate_end(&text, (area.width as usize).saturating_sub(10)), style),
        Span::raw(" ".repeat(padding.min(area.width as usize))),
        Span::styled(stamp, Style::default().fg(colors.dim)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn footer_hints(model: &AppModel) -> &'static str {
    if model.logs.search_open() {
        return "Enter=apply  Esc=cancel  ↑↓=pick match  type to filter";
    }
    match model.navigator.current() {
        LOGS => "↑↓/jk=move  PgUp/PgDn=page  g/G=ends  /=search  Enter=show line  Esc/q=back  F1/?=help",
        crate::app::SETTINGS => "↑↓/jk=move  Enter/←→=toggle  Esc/q=back  F1/?=help",
        _ => "↑↓/jk=move  Enter=open  Esc/q=quit  Ctrl+Q=quit  F1/?=help",
    }
}

fn truncate_end(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width + 1 > max_width {
            break;
        }
        used += ch_width;
        out.push(ch);
    }
    out.push('…');
    out
}
