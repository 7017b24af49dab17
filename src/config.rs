use anyhow::{anyhow, Result};

use crate::cli::Cli;
use crate::model::attribute_mapping::AttributeMapping;
use crate::rc_config::RcConfig;
use crate::validator::xml::DEFAULT_CLOCK_SKEW_SECS;
use crate::validator::ValidatorOptions;

/// Effective settings after merging CLI flags over the rc file
pub struct Settings {
    pub mapping: AttributeMapping,
    pub validator: ValidatorOptions,
    pub verbose: bool,
    pub json: bool,
    pub no_color: bool,
}

pub fn resolve(cli: &Cli, rc: RcConfig) -> Result<Settings> {
    let login = cli
        .login_attribute
        .clone()
        .or(rc.login_attribute)
        .ok_or_else(|| {
            anyhow!("No login attribute configured (use --login-attribute or login_attribute in .samlcheckrc)")
        })?;
    let name = cli
        .name_attribute
        .clone()
        .or(rc.name_attribute)
        .ok_or_else(|| {
            anyhow!("No name attribute configured (use --name-attribute or name_attribute in .samlcheckrc)")
        })?;

    let mapping = AttributeMapping::new(login, name)
        .with_email(cli.email_attribute.clone().or(rc.email_attribute))
        .with_group(cli.group_attribute.clone().or(rc.group_attribute));

    let validator = ValidatorOptions {
        sp_entity_id: cli.sp_entity_id.clone().or(rc.sp_entity_id),
        acs_url: cli.acs_url.clone().or(rc.acs_url),
        idp_entity_id: cli.idp_entity_id.clone().or(rc.idp_entity_id),
        clock_skew_secs: cli
            .clock_skew
            .or(rc.clock_skew_secs)
            .unwrap_or(DEFAULT_CLOCK_SKEW_SECS),
        require_signature: cli.require_signature || rc.require_signature.unwrap_or(false),
        now: None,
    };

    Ok(Settings {
        mapping,
        validator,
        verbose: cli.verbose || rc.verbose.unwrap_or(false),
        json: cli.json || rc.json.unwrap_or(false),
        no_color: cli.no_color || rc.no_color.unwrap_or(false),
    })
}
