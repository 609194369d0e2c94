// cargo watch -x 'fmt' -x 'run -- 192.168.1.10/24'

pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;

use cli::{Args, OutputFormat};
pub use error::CalcError;
use models::{Ipv4, SubnetSummary};

/// Parse and derive the summary for one `<address>/<prefix>` string.
pub fn summarize(cidr: &str) -> Result<SubnetSummary, CalcError> {
    let ipv4 = Ipv4::new(cidr)?;
    Ok(SubnetSummary::from(ipv4))
}

/// Run one invocation and return the complete stdout text.
///
/// Nothing is printed here, so a failure never leaves partial output.
pub fn run<I, S>(args: I) -> Result<String, CalcError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args = Args::parse(args)?;
    let summary = summarize(&args.cidr)?;
    match args.format {
        OutputFormat::Text => Ok(output::render_text(&summary)),
        OutputFormat::Json => output::render_json(&summary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_errors_keep_their_kind() {
        assert!(matches!(
            summarize("256.1.1.1/24"),
            Err(CalcError::InvalidAddress { .. })
        ));
        assert!(matches!(
            summarize("1.1.1.1/33"),
            Err(CalcError::InvalidMask { .. })
        ));
        assert!(matches!(
            summarize("1.1.1.1"),
            Err(CalcError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_run_formats() {
        let text = run(["10.0.0.0/8"]).unwrap();
        assert!(text.starts_with("Address:\t10.0.0.0\n"));

        let json = run(["10.0.0.0/8", "--json"]).unwrap();
        assert!(json.trim_start().starts_with('{'));
    }
}
