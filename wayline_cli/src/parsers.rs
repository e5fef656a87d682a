use jiff::SpanRelativeTo;

/// Accepts both friendly spans ("10s", "2m") and ISO durations ("PT10S").
pub fn parse_duration(input: &str) -> Result<jiff::SignedDuration, String> {
    if let Ok(duration) = input.parse::<jiff::SignedDuration>() {
        return Ok(duration);
    }

    input
        .parse::<jiff::Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
        .map_err(|_| format!("Invalid duration: {input}"))
}
