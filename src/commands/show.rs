use anyhow::Result;
use caldesk_core::storage::KeyValueStore;
use caldesk_core::view::View;
use caldesk_core::{ActiveView, Calendar};

use super::parse_date_arg;
use crate::render::Render;

pub fn run<S: KeyValueStore>(calendar: &mut Calendar<S>, view: View, date: Option<&str>) -> Result<()> {
    if let Some(date) = date {
        calendar.set_current_date(parse_date_arg(date)?);
    }
    calendar.set_view(view);
    tracing::debug!(%view, date = %calendar.current_date(), "rendering view");

    let output = match calendar.active_view() {
        ActiveView::Month(month) => month.render(),
        ActiveView::Week(week) => week.render(),
        ActiveView::Day(day) => day.render(),
    };
    println!("{}", output);

    Ok(())
}
