use super::config::ConfigArgs;
use calendr_core::date_utils::parse_iso_date;
use calendr_core::day_grid::{Day, DayCell};
use calendr_core::layout::FixedWidth;
use calendr_core::{CalendarEngine, GoToDate, PaneView};
use log::info;
use serde_json::json;

const PANE_COLUMNS: usize = 28;
const PANE_SEPARATOR: &str = "  ";
const LEGEND: &str = "[dd] selected  (dd) in range  ~dd~ disabled  {dd} today  * events";

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Available width in columns used to pick between one and two panes
    #[arg(long, short)]
    pub width: Option<usize>,

    /// Date to bring into view, YYYY-MM-DD
    #[arg(long)]
    pub go_to: Option<String>,

    /// Select a date as if it was clicked. Repeat to pick a range
    #[arg(long)]
    pub select: Vec<String>,

    /// Print the resulting state and intents as JSON instead of the panes
    #[arg(long)]
    pub json: bool,
}

pub fn handle_show(args: ShowArgs) -> color_eyre::Result<()> {
    let config = args.config.load_config()?;
    let mut engine = CalendarEngine::new(config);
    engine.observe_size(&FixedWidth(args.width));

    if let Some(date) = args.go_to {
        engine.go_to_date(GoToDate::new(date))?;
    }
    for input in &args.select {
        let date = parse_iso_date(input)?;
        info!("Selecting {}", date);
        engine.select_date(date);
    }

    if args.json {
        let intents = engine.drain_intents();
        let displayed: Vec<String> = engine
            .displayed_months()
            .iter()
            .map(|pane| pane.to_string())
            .collect();
        let out = json!({
            "displayed_months": displayed,
            "value": engine.value(),
            "start_date": engine.start_date(),
            "end_date": engine.end_date(),
            "intents": intents,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", render_text(&engine));
    }
    Ok(())
}

/// Plain text rendering of every displayed pane, side by side
pub fn render_text(engine: &CalendarEngine) -> String {
    let weekdays: String = engine
        .weekday_labels()
        .iter()
        .map(|label| format!("{:>3} ", label))
        .collect();
    let panes: Vec<Vec<String>> = engine
        .pane_views()
        .iter()
        .map(|view| pane_lines(view, &weekdays))
        .collect();

    let height = panes.iter().map(Vec::len).max().unwrap_or(0);
    let blank = " ".repeat(PANE_COLUMNS);
    let mut out = String::new();
    for row in 0..height {
        let line: Vec<&str> = panes
            .iter()
            .map(|lines| lines.get(row).map(String::as_str).unwrap_or(&blank))
            .collect();
        out.push_str(line.join(PANE_SEPARATOR).trim_end());
        out.push('\n');
    }
    out.push('\n');
    out.push_str(LEGEND);
    out.push('\n');
    out
}

fn pane_lines(view: &PaneView, weekdays: &str) -> Vec<String> {
    let header = &view.header;
    let title = format!("{} {}", header.month_label, header.year_label);
    let prev = if header.show_prev { "<" } else { " " };
    let next = if header.show_next { ">" } else { " " };

    let mut lines = vec![
        format!("{}{:^width$}{}", prev, title, next, width = PANE_COLUMNS - 2),
        weekdays.to_string(),
    ];
    for week in view.cells.chunks(7) {
        let mut line: String = week.iter().map(cell_text).collect();
        // trailing days of the last week
        while line.chars().count() < PANE_COLUMNS {
            line.push(' ');
        }
        lines.push(line);
    }
    lines
}

fn cell_text(cell: &DayCell) -> String {
    match cell {
        DayCell::Empty => "    ".to_string(),
        DayCell::Day(day) => {
            let (open, close) = marks(day);
            let close = if close == ' ' && !day.events.is_empty() {
                '*'
            } else {
                close
            };
            format!("{}{:>2}{}", open, day.day, close)
        }
    }
}

fn marks(day: &Day) -> (char, char) {
    if day.selected || day.range_start || day.range_end {
        ('[', ']')
    } else if day.disabled {
        ('~', '~')
    } else if day.in_range || day.hovered_range {
        ('(', ')')
    } else if day.today {
        ('{', '}')
    } else {
        (' ', ' ')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calendr_core::models::EventMarker;
    use calendr_core::{CalendarConfig, RangeCalendars, SelectionMode};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_single_pane_marks() {
        let config = CalendarConfig {
            value: Some("2024-01-10".to_string()),
            disabled_dates: vec!["2024-01-20".to_string()],
            event_markers: vec![EventMarker::new("2024-01-22").tooltip("launch")],
            ..Default::default()
        };
        let engine = CalendarEngine::with_today(config, today());
        let text = render_text(&engine);

        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].contains("January 2024"));
        assert!(lines[0].starts_with('<'));
        assert!(lines[0].ends_with('>'));
        assert!(text.contains("[10]"));
        assert!(text.contains("~20~"));
        assert!(text.contains("{15}"));
        assert!(text.contains(" 22*"));
        assert!(text.ends_with(&format!("{}\n", LEGEND)));
    }

    #[test]
    fn test_dual_range_panes_side_by_side() {
        let config = CalendarConfig {
            mode: SelectionMode::Range,
            range_calendars: RangeCalendars::Two,
            start_date: Some("2024-01-30".to_string()),
            end_date: Some("2024-02-02".to_string()),
            ..Default::default()
        };
        let engine = CalendarEngine::with_today(config, today());
        let text = render_text(&engine);
        let title = text.lines().next().unwrap();

        assert!(title.contains("January 2024"));
        assert!(title.contains("February 2024"));
        // left pane only moves back, right pane only moves forward
        assert!(title.starts_with('<'));
        assert!(title.ends_with('>'));
        assert_eq!(title.matches('<').count(), 1);
        assert_eq!(title.matches('>').count(), 1);
        assert!(text.contains("[30]"));
        assert!(text.contains("(31)"));
        assert!(text.contains("[ 2]"));
    }

    #[test]
    fn test_weekday_row_width() {
        let engine = CalendarEngine::with_today(CalendarConfig::default(), today());
        let text = render_text(&engine);
        let weekday_row = text.lines().nth(1).unwrap();
        assert_eq!(weekday_row.trim_end().chars().count(), PANE_COLUMNS - 1);
    }
}
