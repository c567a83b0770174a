use {
    anyhow::anyhow,
    hyperlane_types::mailbox::Domain,
    ledger_types::Addr,
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Default mailbox the announcements are bound to.
    pub mailbox: Option<Addr>,
    /// Default local domain of the mailbox.
    pub domain: Option<Domain>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mailbox: None,
            domain: None,
            log_level: "info".to_string(),
        }
    }
}

/// The mailbox and domain a registry is bound to, which every signature must
/// commit to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub mailbox: Addr,
    pub domain: Domain,
}

impl Binding {
    /// Command line values take precedence over the config file.
    pub fn resolve(
        cfg: &Config,
        mailbox: Option<Addr>,
        domain: Option<Domain>,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            mailbox: mailbox.or(cfg.mailbox).ok_or_else(|| {
                anyhow!("mailbox is not set! pass `--mailbox` or set `mailbox` in the config file")
            })?,
            domain: domain.or(cfg.domain).ok_or_else(|| {
                anyhow!("domain is not set! pass `--domain` or set `domain` in the config file")
            })?,
        })
    }
}

#[cfg(test)]
mod tests {
    use {super::*, ledger_types::ResultExt};

    #[test]
    fn resolving_binding() {
        let cfg = Config {
            mailbox: Some(Addr::mock(1)),
            domain: Some(1),
            ..Default::default()
        };

        Binding::resolve(&cfg, None, None).should_succeed_and_equal(Binding {
            mailbox: Addr::mock(1),
            domain: 1,
        });
        Binding::resolve(&cfg, Some(Addr::mock(2)), Some(2)).should_succeed_and_equal(Binding {
            mailbox: Addr::mock(2),
            domain: 2,
        });
        Binding::resolve(&Config::default(), None, Some(2))
            .should_fail_with_error("mailbox is not set");
        Binding::resolve(&Config::default(), Some(Addr::mock(2)), None)
            .should_fail_with_error("domain is not set");
    }
}
