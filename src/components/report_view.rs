use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_dispatch::DataResource;

use super::Component;
use crate::action::Action;
use crate::messages;
use crate::state::{AppState, WeatherReport};

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Read-only view of the lookup lifecycle below the search box
#[derive(Default)]
pub struct ReportView;

pub struct ReportViewProps<'a> {
    pub state: &'a AppState,
}

impl Component<Action> for ReportView {
    type Props<'a> = ReportViewProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match &props.state.weather {
            DataResource::Empty => render_hint(frame, area),
            DataResource::Loading => render_loading(frame, area),
            DataResource::Loaded(report) => {
                render_report(frame, area, report, props.state.is_refreshing)
            }
            DataResource::Failed(message) => render_error(frame, area, message),
        }
    }
}

fn centered_chunks(area: Rect, rows: usize) -> std::rc::Rc<[Rect]> {
    Layout::vertical(vec![Constraint::Length(1); rows])
        .flex(Flex::Center)
        .split(area)
}

fn render_hint(frame: &mut Frame, area: Rect) {
    let chunks = centered_chunks(area, 1);
    let hint = Line::from(vec![
        Span::styled("Type a city name and press ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan).bold()),
        Span::styled(" to search", Style::default().fg(Color::DarkGray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(hint), chunks[0]);
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let chunks = centered_chunks(area, 1);
    let msg = Line::from(vec![Span::styled(
        "Loading...",
        Style::default().fg(Color::DarkGray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(msg), chunks[0]);
}

fn render_report(frame: &mut Frame, area: Rect, report: &WeatherReport, is_refreshing: bool) {
    // blank row between the advice lines and the location line
    let chunks = centered_chunks(area, 4);

    // A resubmit keeps the last report visible until it resolves
    if is_refreshing {
        let refreshing = Line::from(vec![Span::styled(
            "Loading...",
            Style::default().fg(Color::DarkGray),
        )])
        .centered();
        frame.render_widget(Paragraph::new(refreshing), chunks[2]);
    }

    let temperature = Line::from(vec![Span::styled(
        messages::temperature_message(report.temperature_c),
        Style::default().fg(Color::White),
    )])
    .centered();
    frame.render_widget(Paragraph::new(temperature), chunks[0]);

    let condition = Line::from(vec![Span::styled(
        messages::condition_message(&report.condition),
        Style::default().fg(Color::Gray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(condition), chunks[1]);

    // Day/night is read off the wall clock here, at render time
    let location = Line::from(vec![Span::styled(
        messages::location_message(&report.location_name),
        Style::default().fg(Color::DarkGray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(location), chunks[3]);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let chunks = centered_chunks(area, 4);

    frame.render_widget(
        Paragraph::new(Line::from(ERROR_ICON).centered()),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                message.to_string(),
                Style::default().fg(Color::Rgb(200, 100, 100)),
            )])
            .centered(),
        ),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled("Esc", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to clear", Style::default().fg(Color::DarkGray)),
            ])
            .centered(),
        ),
        chunks[3],
    );
}
