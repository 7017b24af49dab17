use clap::Parser;
use std::path::PathBuf;

/// SAML Response Diagnostics
#[derive(Parser, Debug)]
#[command(
    name = "samlcheck",
    version,
    about = "Diagnose a SAML response against an attribute mapping",
    long_about = "Validates the structure, status and conditions of a SAML 2.0 Response, \
                  resolves the configured login, name, email and group attributes, and \
                  warns about mapped attributes the identity provider did not send. \
                  Signatures are checked for presence only, never verified.",
    after_help = "\
EXAMPLES:
  samlcheck --login-attribute uid --name-attribute cn response.xml
  pbpaste | samlcheck --json                 Read a base64 SAMLResponse from stdin
  samlcheck -v --config ./samlcheck.toml response.b64

EXIT CODES:
  0  Response accepted (warnings may still be reported)
  1  Response rejected or could not be processed
  2  Tool failure (e.g., missing mapping, unreadable file)

CONFIGURATION:
  Settings are read from .samlcheckrc in the current directory, then $HOME,
  unless --config is given. Command line flags take precedence."
)]
pub struct Cli {
    /// SAML Response file, raw XML or base64 ("-" reads stdin)
    #[arg(default_value = "-", value_name = "RESPONSE")]
    pub response: PathBuf,

    /// Attribute holding the user login
    #[arg(long, value_name = "KEY")]
    pub login_attribute: Option<String>,

    /// Attribute holding the user display name
    #[arg(long, value_name = "KEY")]
    pub name_attribute: Option<String>,

    /// Attribute holding the user email
    #[arg(long, value_name = "KEY")]
    pub email_attribute: Option<String>,

    /// Attribute holding the user groups
    #[arg(long, value_name = "KEY")]
    pub group_attribute: Option<String>,

    /// Expected audience (service provider entity ID)
    #[arg(long, value_name = "ID")]
    pub sp_entity_id: Option<String>,

    /// Expected Destination (assertion consumer service URL)
    #[arg(long, value_name = "URL")]
    pub acs_url: Option<String>,

    /// Expected issuer (identity provider entity ID)
    #[arg(long, value_name = "ID")]
    pub idp_entity_id: Option<String>,

    /// Tolerated clock skew for NotBefore/NotOnOrAfter
    #[arg(long, value_name = "SECS")]
    pub clock_skew: Option<u32>,

    /// Reject responses without a Signature element
    #[arg(long)]
    pub require_signature: bool,

    /// Configuration file to use instead of .samlcheckrc
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also list every attribute found in the response
    #[arg(short, long)]
    pub verbose: bool,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log filter for diagnostics on stderr (e.g. "debug")
    #[arg(long, env = "SAMLCHECK_LOG_LEVEL", default_value = "warn", value_name = "LEVEL")]
    pub log_level: String,
}
