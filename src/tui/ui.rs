use crate::tui::app::{App, HitAreas};
use crate::tui::colors;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

const SEARCH_PREFIX: &str = " \u{1F50D} ";
const TRIGGER_LABEL: &str = " \u{1F464} Profile \u{25BE} ";

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Hit areas are rebuilt on every frame; hidden widgets keep a zero rect
    app.hit = HitAreas::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Menu bar
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Suggestions
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_menu_bar(frame, app, chunks[0]);
    draw_search_bar(frame, app, chunks[1]);
    draw_results(frame, app, chunks[2]);
    draw_status_bar(frame, app, chunks[3]);

    // Dropdown overlays everything below the menu bar
    if app.menu.open {
        draw_profile_dropdown(frame, app, area);
    }

    // Show cursor in the search bar when focused (and no menu is open)
    if app.search.focused && !app.menu.open {
        let prefix_width = SEARCH_PREFIX.width() as u16;
        let typed_width = app.search.query[..app.search.cursor_pos].width() as u16;
        let cursor_x = chunks[1].x + 1 + prefix_width + typed_width;
        let cursor_y = chunks[1].y + 1;
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn draw_menu_bar(frame: &mut Frame, app: &mut App, area: Rect) {
    let title = " marquee ";
    let title_width = title.width();
    let trigger_width = TRIGGER_LABEL.width();
    let fill = (area.width as usize).saturating_sub(title_width + trigger_width);

    let line = Line::from(vec![
        Span::styled(title, colors::bar_title()),
        Span::styled(" ".repeat(fill), colors::bar_fill()),
        Span::styled(TRIGGER_LABEL, colors::bar_item(app.menu.open)),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    app.hit.trigger = Rect::new(
        area.x + (title_width + fill) as u16,
        area.y,
        trigger_width as u16,
        1,
    );
}

fn draw_search_bar(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(colors::border(app.search.focused))
        .title(" Search ");

    let text = format!("{}{}", SEARCH_PREFIX, app.search.query);
    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
    app.hit.search = area;
}

fn draw_results(frame: &mut Frame, app: &mut App, area: Rect) {
    if !app.results.is_visible() {
        let hint = Paragraph::new(
            "Start typing to search the catalog. Enter opens the highlighted match in your browser.",
        )
        .style(colors::hint());
        let hint_area = Rect::new(
            area.x + 2,
            area.y + 1,
            area.width.saturating_sub(4),
            1.min(area.height),
        );
        frame.render_widget(hint, hint_area);
        return;
    }

    let row_count = if app.results.notice().is_some() {
        1
    } else {
        app.results.len()
    };
    let height = (row_count as u16 + 2).min(area.height);
    let popup = Rect::new(area.x, area.y, area.width, height);

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Suggestions ");
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    app.hit.results = popup;
    app.results.visible_rows = inner.height as usize;

    if let Some(notice) = app.results.notice() {
        let text = format!(" \u{26A0} {}", notice);
        let row_area = Rect::new(inner.x, inner.y, inner.width, 1.min(inner.height));
        frame.render_widget(Paragraph::new(text).style(colors::notice()), row_area);
        return;
    }

    let start = app.results.scroll_offset;
    let end = (start + inner.height as usize).min(app.results.len());

    for (visual_idx, idx) in (start..end).enumerate() {
        let suggestion = &app.results.suggestions()[idx];
        let is_selected = app.results.selected == Some(idx);
        let row_area = Rect::new(inner.x, inner.y + visual_idx as u16, inner.width, 1);

        let title = format!(" \u{1F3AC} {}  ", suggestion.title);
        let available = (inner.width as usize).saturating_sub(title.width() + 1);
        let url = crate::middle_ellipsis(&suggestion.url, available);

        let line = Line::from(vec![
            Span::styled(title, colors::result_title(is_selected)),
            Span::styled(url, colors::result_url(is_selected)),
        ]);
        let row_style = if is_selected {
            colors::result_url(true)
        } else {
            Style::default()
        };
        frame.render_widget(Paragraph::new(line).style(row_style), row_area);
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = if app.in_flight.is_some() {
        format!(" \u{23F3} {}", app.status_message)
    } else {
        format!(" {}", app.status_message)
    };

    let right_text = " Enter:Open  Ctrl+L:Copy link  F10:Profile  Esc:Dismiss  Ctrl+Q:Quit ";

    // Left-aligned status + padding + right-aligned key hints
    let available_width = area.width as usize;
    let left_len = left_text.width();
    let right_len = right_text.width();

    let status_str = if left_len + right_len < available_width {
        let padding = available_width - left_len - right_len;
        format!("{}{:padding$}{}", left_text, "", right_text, padding = padding)
    } else {
        // Not enough space, just show the status
        format!("{:width$}", left_text, width = available_width)
    };

    frame.render_widget(Paragraph::new(status_str).style(colors::status_bar()), area);
}

fn draw_profile_dropdown(frame: &mut Frame, app: &mut App, area: Rect) {
    let max_label_len = app
        .menu
        .items
        .iter()
        .map(|(label, _)| label.width())
        .max()
        .unwrap_or(10);

    let width = (max_label_len as u16 + 4).max(16).min(area.width);
    let height = (app.menu.items.len() as u16 + 2).min(area.height.saturating_sub(1));
    let x = area.width.saturating_sub(width);
    let popup = Rect::new(x, 1, width, height);

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    for (i, (label, _)) in app.menu.items.iter().enumerate() {
        if i as u16 >= inner.height {
            break;
        }
        let item_area = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
        let text = format!(" {} ", label);
        frame.render_widget(
            Paragraph::new(text).style(colors::menu_row(i == app.menu.selected)),
            item_area,
        );
    }

    app.hit.menu = popup;
}
