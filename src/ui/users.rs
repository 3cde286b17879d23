use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::api::{Address, UserRecord};
use crate::app::{AppState, Theme, ViewState};

/// The three address lines of a card: street + suite, city + zipcode, geo.
pub fn address_lines(address: &Address) -> [String; 3] {
    [
        format!("{}, {}", address.street, address.suite),
        format!("{}, {}", address.city, address.zipcode),
        format!("Location: {}, {}", address.geo.lat, address.geo.lng),
    ]
}

/// Build the styled lines of one profile card, trailing blank separator
/// included. Pure: the same record always yields the same lines.
pub fn card_lines(user: &UserRecord, theme: &Theme) -> Vec<Line<'static>> {
    let label = Style::default().fg(theme.muted);
    let value = Style::default().fg(theme.text);
    let section = Style::default().fg(theme.heading);
    let detail = |indent: &str, name: &str, v: &str| {
        Line::from(vec![
            Span::styled(format!("{indent}{name}: "), label),
            Span::styled(v.to_string(), value),
        ])
    };
    let [street, city, geo] = address_lines(&user.address);

    vec![
        Line::from(Span::styled(
            user.name.clone(),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )),
        detail("  ", "Username", &user.username),
        detail("  ", "Email", &user.email),
        detail("  ", "Phone", &user.phone),
        detail("  ", "Website", &user.website),
        Line::from(Span::styled("  Address:".to_string(), section)),
        Line::from(Span::styled(format!("    {street}"), value)),
        Line::from(Span::styled(format!("    {city}"), value)),
        Line::from(Span::styled(format!("    {geo}"), value)),
        Line::from(Span::styled("  Company:".to_string(), section)),
        detail("    ", "Name", &user.company.name),
        detail("    ", "Catch Phrase", &user.company.catch_phrase),
        detail("    ", "BS", &user.company.bs),
        Line::raw(""),
    ]
}

/// Render the loaded records as a scrollable column of cards under the
/// collection heading. An empty record list renders the heading alone.
pub fn render_user_cards(f: &mut Frame, area: Rect, app: &mut AppState) {
    let (mut lines, count) = match &app.view {
        ViewState::Loaded(users) => {
            let mut lines: Vec<Line<'static>> = Vec::new();
            for user in users {
                lines.extend(card_lines(user, &app.theme));
            }
            (lines, users.len())
        }
        _ => return,
    };
    // Last card ends flush with the border
    if lines.last().is_some_and(|l| l.width() == 0) {
        lines.pop();
    }

    app.viewport_rows = area.height.saturating_sub(2) as usize;
    app.content_rows = lines.len();
    if app.scroll > app.max_scroll() {
        app.scroll = app.max_scroll();
    }

    let title = format!("{} ({count})", crate::ui::HEADING);
    let p = Paragraph::new(lines)
        .style(Style::default().fg(app.theme.text))
        .scroll((app.scroll.min(u16::MAX as usize) as u16, 0))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(p, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Company, Geo};

    fn fixture_record() -> UserRecord {
        UserRecord {
            id: 1,
            name: "Leanne Graham".to_string(),
            username: "Bret".to_string(),
            email: "Sincere@april.biz".to_string(),
            address: Address {
                street: "Kulas Light".to_string(),
                suite: "Apt. 556".to_string(),
                city: "Gwenborough".to_string(),
                zipcode: "92998-3874".to_string(),
                geo: Geo {
                    lat: "-37.3159".to_string(),
                    lng: "81.1496".to_string(),
                },
            },
            phone: "1-770-736-8031 x56442".to_string(),
            website: "hildegard.org".to_string(),
            company: Company {
                name: "Romaguera-Crona".to_string(),
                catch_phrase: "Multi-layered client-server neural-net".to_string(),
                bs: "harness real-time e-markets".to_string(),
            },
        }
    }

    #[test]
    fn address_lines_match_reference_strings() {
        let [street, city, geo] = address_lines(&fixture_record().address);
        assert_eq!(street, "Kulas Light, Apt. 556");
        assert_eq!(city, "Gwenborough, 92998-3874");
        assert_eq!(geo, "Location: -37.3159, 81.1496");
    }

    #[test]
    fn address_lines_are_stable_across_calls() {
        let record = fixture_record();
        let first = address_lines(&record.address);
        let second = address_lines(&record.address);
        assert_eq!(first, second);
    }

    #[test]
    fn card_lines_contain_every_field() {
        let record = fixture_record();
        let theme = Theme::dark();
        let text: Vec<String> = card_lines(&record, &theme)
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();

        assert_eq!(text[0], "Leanne Graham");
        assert!(text.contains(&"  Username: Bret".to_string()));
        assert!(text.contains(&"  Email: Sincere@april.biz".to_string()));
        assert!(text.contains(&"  Phone: 1-770-736-8031 x56442".to_string()));
        assert!(text.contains(&"  Website: hildegard.org".to_string()));
        assert!(text.contains(&"    Kulas Light, Apt. 556".to_string()));
        assert!(text.contains(&"    Gwenborough, 92998-3874".to_string()));
        assert!(text.contains(&"    Location: -37.3159, 81.1496".to_string()));
        assert!(text.contains(&"    Name: Romaguera-Crona".to_string()));
        assert!(
            text.contains(&"    Catch Phrase: Multi-layered client-server neural-net".to_string())
        );
        assert!(text.contains(&"    BS: harness real-time e-markets".to_string()));
    }

    #[test]
    fn card_lines_are_identical_for_identical_input() {
        let record = fixture_record();
        let theme = Theme::mocha();
        let first: Vec<String> = card_lines(&record, &theme)
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        let second: Vec<String> = card_lines(&record, &theme)
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn blank_record_renders_blank_values_not_errors() {
        let record = UserRecord::default();
        let theme = Theme::dark();
        let text: Vec<String> = card_lines(&record, &theme)
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert!(text.contains(&"  Username: ".to_string()));
        assert!(text.contains(&"    , ".to_string()));
        assert!(text.contains(&"    Location: , ".to_string()));
    }
}
