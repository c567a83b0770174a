use {
    crate::config::{Binding, Config},
    anyhow::ensure,
    clap::{Args, Parser},
    hyperlane_types::{Announcement, ValidatorSigner, mailbox::Domain, replay_hash},
    ledger_types::{Addr, Hash256, HexBinary, JsonSerExt},
    serde::Serialize,
};

#[derive(Args)]
pub struct BindingArgs {
    /// Mailbox the registry is bound to [default: from config]
    #[arg(long)]
    pub mailbox: Option<Addr>,

    /// Local domain of the mailbox [default: from config]
    #[arg(long)]
    pub domain: Option<Domain>,
}

impl BindingArgs {
    pub fn resolve(self, cfg: &Config) -> anyhow::Result<Binding> {
        Binding::resolve(cfg, self.mailbox, self.domain)
    }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
struct DigestResponse {
    signing_hash: Hash256,
    digest: Hash256,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
struct VerifyResponse {
    validator: Addr,
    digest: Hash256,
}

/// Print the hash a validator must sign to announce a storage location
#[derive(Parser)]
pub struct DigestCmd {
    /// Storage location to announce
    location: String,

    #[command(flatten)]
    binding: BindingArgs,
}

impl DigestCmd {
    pub fn run(self, cfg: &Config) -> anyhow::Result<()> {
        let binding = self.binding.resolve(cfg)?;
        let res = digest(binding, &self.location);

        println!("{}", res.to_json_string_pretty()?);

        Ok(())
    }
}

/// Sign an announcement and print the resulting `announce` message
#[derive(Parser)]
pub struct SignCmd {
    /// Storage location to announce
    location: String,

    /// Validator's secp256k1 private key in hex encoding
    #[arg(long, env = "HYPERLANE_VA_PRIVATE_KEY", hide_env_values = true)]
    private_key: HexBinary,

    #[command(flatten)]
    binding: BindingArgs,
}

impl SignCmd {
    pub fn run(self, cfg: &Config) -> anyhow::Result<()> {
        let binding = self.binding.resolve(cfg)?;
        let signer = ValidatorSigner::from_bytes(&self.private_key)?;
        let msg = signer.announce_msg(binding.mailbox, binding.domain, &self.location)?;

        tracing::info!(
            validator = %signer.address(),
            location = self.location.as_str(),
            "Signed announcement"
        );

        println!("{}", msg.to_json_string_pretty()?);

        Ok(())
    }
}

/// Check that a signature was produced by the claimed validator
#[derive(Parser)]
pub struct VerifyCmd {
    /// Storage location that was announced
    location: String,

    /// Address the announcement claims to come from
    #[arg(long)]
    validator: Addr,

    /// Signature in hex encoding, `r || s || v`
    #[arg(long)]
    signature: HexBinary,

    #[command(flatten)]
    binding: BindingArgs,
}

impl VerifyCmd {
    pub fn run(self, cfg: &Config) -> anyhow::Result<()> {
        let binding = self.binding.resolve(cfg)?;
        let res = verify(binding, self.validator, &self.signature, &self.location)?;

        println!("{}", res.to_json_string_pretty()?);

        Ok(())
    }
}

/// Print the replay id of a validator and storage location pair
#[derive(Parser)]
pub struct ReplayIdCmd {
    /// Storage location
    location: String,

    /// Validator address
    #[arg(long)]
    validator: Addr,
}

impl ReplayIdCmd {
    pub fn run(self) -> anyhow::Result<()> {
        println!("{}", replay_hash(self.validator, &self.location));

        Ok(())
    }
}

fn digest(binding: Binding, location: &str) -> DigestResponse {
    // The validator is not part of the signed payload.
    let announcement = Announcement::new(
        Addr::from_inner([0; 20]),
        binding.mailbox,
        binding.domain,
        location,
    );

    DigestResponse {
        signing_hash: announcement.signing_hash(),
        digest: announcement.digest(),
    }
}

fn verify(
    binding: Binding,
    validator: Addr,
    signature: &[u8],
    location: &str,
) -> anyhow::Result<VerifyResponse> {
    let announcement = Announcement::new(validator, binding.mailbox, binding.domain, location);
    let signer = announcement.recover_signer(signature)?;

    ensure!(
        signer == validator,
        "signature does not match validator! expecting: {validator}, recovered: {signer}"
    );

    Ok(VerifyResponse {
        validator,
        digest: announcement.digest(),
    })
}

// ----------------------------------- tests -----------------------------------
