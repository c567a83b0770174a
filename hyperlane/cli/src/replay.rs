use {
    crate::{
        announce::BindingArgs,
        config::{Binding, Config},
    },
    anyhow::{Context, ensure},
    clap::Parser,
    hyperlane_types::va::InstantiateMsg,
    hyperlane_va::Registry,
    ledger_types::{Addr, HexBinary, JsonDeExt, JsonSerExt, MockStorage},
    serde::{Deserialize, Serialize},
    std::{fs, path::PathBuf},
};

/// Submits the announcements and deploys the throwaway registry.
const OPERATOR: Addr = Addr::from_inner([0; 20]);

/// An entry of the input file. Other fields are ignored, so files of test
/// vectors can be replayed as-is.
#[derive(Deserialize, Debug, Clone)]
pub struct SignedAnnouncement {
    pub validator: Addr,
    pub signature: HexBinary,
    pub storage_location: String,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub validator: Addr,
    pub storage_location: String,
    /// The reason the announcement was rejected, if it was.
    pub error: Option<String>,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ReplayResponse {
    pub outcomes: Vec<Outcome>,
    pub validators: Vec<Addr>,
    pub storage_locations: Vec<Vec<String>>,
}

/// Apply a JSON list of signed announcements to a fresh in-memory registry
#[derive(Parser)]
pub struct ReplayCmd {
    /// JSON file containing a list of `{ validator, signature, storage_location }`
    file: PathBuf,

    /// Exit successfully even if some announcements are rejected
    #[arg(long)]
    allow_rejections: bool,

    #[command(flatten)]
    binding: BindingArgs,
}

impl ReplayCmd {
    pub fn run(self, cfg: &Config) -> anyhow::Result<()> {
        let binding = self.binding.resolve(cfg)?;

        let bytes = fs::read(&self.file)
            .with_context(|| format!("failed to read {}", self.file.display()))?;
        let announcements = bytes.deserialize_json::<Vec<SignedAnnouncement>>()?;

        let res = replay(binding, announcements)?;

        println!("{}", res.to_json_string_pretty()?);

        let rejected = res.outcomes.iter().filter(|o| o.error.is_some()).count();

        ensure!(
            self.allow_rejections || rejected == 0,
            "{rejected} of {} announcements were rejected",
            res.outcomes.len()
        );

        Ok(())
    }
}

pub fn replay(
    binding: Binding,
    announcements: Vec<SignedAnnouncement>,
) -> anyhow::Result<ReplayResponse> {
    let (registry, cap) = Registry::deploy(MockStorage::new(), OPERATOR)?;

    registry.create(OPERATOR, &cap, InstantiateMsg {
        mailbox: binding.mailbox,
        domain: binding.domain,
    })?;

    let outcomes = announcements
        .into_iter()
        .map(|announcement| {
            let result = registry.announce(
                OPERATOR,
                announcement.validator,
                announcement.signature,
                &announcement.storage_location,
            );

            Outcome {
                validator: announcement.validator,
                storage_location: announcement.storage_location,
                error: result.err().map(|err| err.to_string()),
            }
        })
        .collect();

    let validators = registry.announced_validators()?;
    let storage_locations = registry.announced_storage_locations(&validators)?;

    Ok(ReplayResponse {
        outcomes,
        validators,
        storage_locations,
    })
}

// ----------------------------------- tests -----------------------------------
