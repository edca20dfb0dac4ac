use fruitbox_engine::GameSession;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

/// Score panel: running score, stored best, and the match counters.
#[derive(Debug)]
pub struct StatsDisplay<'a> {
    session: &'a GameSession,
    block: Option<Block<'a>>,
}

impl<'a> StatsDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            block: None,
        }
    }

    pub fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }
}

impl Widget for StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let stats = self.session.stats();
        let lines = vec![
            Line::from(format!("SCORE   {:>7}", self.session.score())),
            Line::from(format!("BEST    {:>7}", self.session.high_score())),
            Line::raw(""),
            Line::from(format!("MATCHES {:>7}", stats.matches())),
            Line::from(format!("APPLES  {:>7}", stats.apples_cleared())),
            Line::from(format!("BIGGEST {:>7}", stats.largest_match())),
        ];

        let mut paragraph = Paragraph::new(lines);
        if let Some(block) = self.block {
            paragraph = paragraph.block(block);
        }
        paragraph.render(area, buf);
    }
}
