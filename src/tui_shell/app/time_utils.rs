use super::*;

fn ts_ui_format() -> &'static [FormatItem<'static>] {
    static FMT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse(
            "[hour padding:zero]:[minute padding:zero]:[second padding:zero]",
        )
        .unwrap_or_default()
    })
}

pub(super) fn fmt_ts_ui(ts: &str) -> String {
    OffsetDateTime::parse(ts, &Rfc3339)
        .ok()
        .and_then(|dt| dt.format(ts_ui_format()).ok())
        .unwrap_or_else(|| ts.to_string())
}

pub(super) fn now_ts() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "<time>".to_string())
}
