use {
    crate::{Json, JsonSerExt, StdError, StdResult},
    serde::{Deserialize, Serialize, de::DeserializeOwned},
};

/// Events that can be attached to a [`Response`].
pub trait EventName {
    const EVENT_NAME: &'static str;
}

/// An event emitted by a call, for off-chain observers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContractEvent {
    #[serde(rename = "type")]
    pub ty: String,
    pub data: Json,
}

impl ContractEvent {
    pub fn new<E>(event: &E) -> StdResult<Self>
    where
        E: EventName + Serialize,
    {
        Ok(Self {
            ty: E::EVENT_NAME.to_string(),
            data: event.to_json_value()?,
        })
    }

    /// Decode the event data, if the event is of type `E`.
    pub fn as_typed<E>(&self) -> StdResult<Option<E>>
    where
        E: EventName + DeserializeOwned,
    {
        if self.ty != E::EVENT_NAME {
            return Ok(None);
        }

        serde_json::from_value(self.data.clone())
            .map(Some)
            .map_err(|err| StdError::deserialize::<E, _>("json", err))
    }
}

/// The outcome of a successful call.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub events: Vec<ContractEvent>,
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_event<E>(mut self, event: E) -> StdResult<Self>
    where
        E: EventName + Serialize,
    {
        self.events.push(ContractEvent::new(&event)?);
        Ok(self)
    }
}
