use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::{Stdout, stdout};
use study_lens_engine::{Analysis, Block as DocBlock, Span as DocSpan};

/// One row of the section tree.
struct TreeItem {
    depth: usize,
    title: String,
    section: usize,
    subsection: Option<usize>,
    expandable: bool,
    expanded: bool,
}

struct App {
    analysis: Analysis,
    expanded: Vec<bool>,
    tree_items: Vec<TreeItem>,
    list_state: ListState,
}

impl App {
    fn new(analysis: Analysis, open_first_section: bool) -> Self {
        let expanded = (0..analysis.document.sections.len())
            .map(|i| open_first_section && i == 0)
            .collect();

        let mut app = Self {
            analysis,
            expanded,
            tree_items: Vec::new(),
            list_state: ListState::default(),
        };
        app.rebuild_items();

        if !app.tree_items.is_empty() {
            app.list_state.select(Some(0));
        }
        app
    }

    fn rebuild_items(&mut self) {
        let mut items = Vec::new();
        for (i, section) in self.analysis.document.sections.iter().enumerate() {
            items.push(TreeItem {
                depth: 0,
                title: display_title(&section.title),
                section: i,
                subsection: None,
                expandable: section.is_nested(),
                expanded: self.expanded[i],
            });
            if section.is_nested() && self.expanded[i] {
                for (j, sub) in section.subsections().iter().enumerate() {
                    items.push(TreeItem {
                        depth: 1,
                        title: display_title(&sub.title),
                        section: i,
                        subsection: Some(j),
                        expandable: false,
                        expanded: false,
                    });
                }
            }
        }
        self.tree_items = items;
    }

    fn next_item(&mut self) {
        if self.tree_items.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.tree_items.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous_item(&mut self) {
        if self.tree_items.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.tree_items.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Expands or collapses the selected section, keeping the selection on it.
    fn toggle_selected(&mut self) {
        if let Some(index) = self.list_state.selected()
            && let Some(item) = self.tree_items.get(index)
            && item.subsection.is_none()
        {
            let section = item.section;
            self.expanded[section] = !self.expanded[section];
            self.rebuild_items();
            let row = self
                .tree_items
                .iter()
                .position(|item| item.section == section && item.subsection.is_none());
            self.list_state.select(row);
        }
    }

    fn selected_content(&self) -> Vec<Line<'static>> {
        let Some(item) = self
            .list_state
            .selected()
            .and_then(|index| self.tree_items.get(index))
        else {
            return vec![Line::from("This analysis has no sections")];
        };

        let section = &self.analysis.document.sections[item.section];
        let mut lines = match item.subsection {
            Some(j) => block_lines(&section.subsections()[j].blocks),
            None => block_lines(section.own_blocks()),
        };

        if item.subsection.is_none() && section.is_nested() && !item.expanded {
            lines.push(Line::from(Span::styled(
                format!("{} subsections, press Enter to expand", section.subsections().len()),
                Style::default().fg(Color::DarkGray),
            )));
        }
        if let Some(model) = &self.analysis.model_used {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Generated by {model}"),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines
    }
}

fn display_title(title: &str) -> String {
    if title.is_empty() {
        "(untitled)".to_string()
    } else {
        title.to_string()
    }
}

fn block_lines(blocks: &[DocBlock]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for block in blocks {
        match block {
            DocBlock::Paragraph { spans } => {
                lines.extend(styled_lines(spans).into_iter().map(Line::from));
            }
            DocBlock::BulletList { items } => {
                for item in items {
                    for (i, mut line) in styled_lines(item).into_iter().enumerate() {
                        line.insert(0, Span::raw(if i == 0 { "• " } else { "  " }));
                        lines.push(Line::from(line));
                    }
                }
            }
        }
        lines.push(Line::from(""));
    }
    lines
}

/// Styles spans and breaks them into terminal lines at each `\n`.
///
/// Bold spans never contain a newline, so only plain text is split.
fn styled_lines(spans: &[DocSpan]) -> Vec<Vec<Span<'static>>> {
    let mut lines = vec![Vec::new()];
    for span in spans.iter().filter(|span| !span.is_empty()) {
        match span {
            DocSpan::PlainText(text) => {
                for (i, part) in text.split('\n').enumerate() {
                    if i > 0 {
                        lines.push(Vec::new());
                    }
                    if !part.is_empty()
                        && let Some(line) = lines.last_mut()
                    {
                        line.push(Span::raw(part.to_string()));
                    }
                }
            }
            DocSpan::Bold(text) => {
                if let Some(line) = lines.last_mut() {
                    line.push(Span::styled(
                        text.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ));
                }
            }
        }
    }
    lines
}

pub fn run(analysis: Analysis, open_first_section: bool) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(analysis, open_first_section);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_item(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_item(),
                KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    let section_items: Vec<ListItem> = app
        .tree_items
        .iter()
        .map(|item| {
            let indent = "  ".repeat(item.depth);
            let icon = match (item.expandable, item.expanded) {
                (true, true) => "▾ ",
                (true, false) => "▸ ",
                (false, _) => "  ",
            };
            ListItem::new(Line::from(format!("{indent}{icon}{}", item.title)))
        })
        .collect();

    let sections = List::new(section_items)
        .block(Block::default().borders(Borders::ALL).title("Sections"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
    f.render_stateful_widget(sections, chunks[0], &mut app.list_state);

    let content = Paragraph::new(app.selected_content())
        .block(Block::default().borders(Borders::ALL).title("Analysis"))
        .wrap(Wrap { trim: false });
    f.render_widget(content, chunks[1]);

    let help = Paragraph::new(Line::from(
        "q: Quit | ↑/k: Previous | ↓/j: Next | Enter/Space: Expand/Collapse",
    ));
    f.render_widget(help, rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "## Overview\nIntro.\n## Apply\n### New\n- a\n### Old\n- b";

    fn titles(app: &App) -> Vec<&str> {
        app.tree_items.iter().map(|i| i.title.as_str()).collect()
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn nested_sections_start_collapsed_except_first() {
        let app = App::new(Analysis::from_text(TEXT, None), true);
        assert_eq!(titles(&app), vec!["Overview", "Apply"]);
    }

    #[test]
    fn toggling_reveals_subsections() {
        let mut app = App::new(Analysis::from_text(TEXT, None), true);
        app.next_item();
        app.toggle_selected();

        assert_eq!(titles(&app), vec!["Overview", "Apply", "New", "Old"]);
        assert_eq!(app.list_state.selected(), Some(1));
    }

    #[test]
    fn lead_in_text_is_a_subsection_row() {
        let mut app = App::new(
            Analysis::from_text("## Apply\nLead.\n### New\n- a\n### Old\n- b", None),
            false,
        );
        app.toggle_selected();
        assert_eq!(titles(&app), vec!["Apply", "Lead.", "New", "Old"]);
    }

    #[test]
    fn subsection_rows_do_not_toggle() {
        let mut app = App::new(Analysis::from_text(TEXT, None), false);
        app.next_item();
        app.toggle_selected();
        app.next_item();
        app.toggle_selected();
        assert_eq!(app.tree_items.len(), 4);
    }

    #[test]
    fn selection_wraps_around() {
        let mut app = App::new(Analysis::from_text(TEXT, None), false);
        app.previous_item();
        assert_eq!(app.list_state.selected(), Some(1));
        app.next_item();
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn empty_analysis_has_no_rows() {
        let mut app = App::new(Analysis::from_text("", None), true);
        app.next_item();
        assert!(app.tree_items.is_empty());
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn bold_spans_are_styled() {
        let lines = styled_lines(&study_lens_engine::parse_spans("a **b** c"));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 3);
        assert!(lines[0][1].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn wrapped_paragraph_keeps_its_line_breaks() {
        let blocks = study_lens_engine::parse_blocks("first **line**\nsecond line");
        let lines = block_lines(&blocks);
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["first line", "second line", ""]);
    }

    #[test]
    fn bullet_continuation_lines_are_indented() {
        let blocks = study_lens_engine::parse_blocks("- one\nmore\n- two");
        let texts: Vec<String> = block_lines(&blocks).iter().map(line_text).collect();
        assert_eq!(texts, vec!["• one", "  more", "• two", ""]);
    }
}
