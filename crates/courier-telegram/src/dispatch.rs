use courier_core::error::{CourierError, Result};
use tracing::{debug, warn};

use crate::api::Api;
use crate::encode::encode;
use crate::envelope;
use crate::methods::Command;

/// Run one command end to end: validate, encode, send, decode, post-process.
///
/// A validation or encoding failure returns before any request is made.
pub async fn dispatch<C: Command>(api: &Api, token: &str, cmd: &C) -> Result<C::Output> {
    cmd.check()?;

    let payload = encode(cmd).await?;
    debug!(method = C::METHOD, kind = ?payload.kind(), "dispatching");

    let response = api.post(token, C::METHOD, payload).await?;

    let mut output = match envelope::decode::<C::Output>(&response.body) {
        Ok(output) => output,
        // A non-2xx answer that isn't an envelope came from something other than the API
        // (a proxy, a load balancer); report it as a transport failure.
        Err(CourierError::Decode(reason)) if !response.is_success() => {
            return Err(CourierError::Transport {
                status: Some(response.status),
                message: format!("unexpected response to {}: {reason}", C::METHOD),
            });
        }
        Err(e) => {
            if let CourierError::Api { code, description } = &e {
                warn!(method = C::METHOD, code, %description, "api rejected request");
            }
            return Err(e);
        }
    };

    C::finish(&mut output);
    Ok(output)
}
