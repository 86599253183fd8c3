//! Part 5.3 SASL: the frames exchanged during SASL negotiation, before the AMQP
//! connection's `open`/`close` performatives take over.

use amqp_codec::dispatch::{Marshal, Unmarshal};
use amqp_codec::primitives::Symbol;
use amqp_codec::read::Read;
use amqp_codec::write::Write;
use amqp_codec::{Error, Result};

use crate::composite_schema;

/// 5.3.2 SASL Mechanisms: advertises the SASL mechanisms available to the sending peer,
/// sent by the server to start SASL negotiation.
#[derive(Debug, Clone, PartialEq)]
pub struct SaslMechanisms {
    /// The sender's supported SASL mechanisms.
    pub sasl_server_mechanisms: Vec<Symbol>,
}

composite_schema! {
    struct SaslMechanisms, code = 0x40;
    sasl_server_mechanisms: Vec<Symbol> = (required),
}

/// 5.3.3 SASL Init: selects a SASL mechanism and begins the exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct SaslInit {
    /// The selected SASL mechanism.
    pub mechanism: Symbol,
    /// The SASL initial response, if the chosen mechanism defines one.
    pub initial_response: Option<Vec<u8>>,
    /// The name of the target host being connected to, as used in DNS/TLS SNI.
    pub hostname: Option<String>,
}

composite_schema! {
    struct SaslInit, code = 0x41;
    mechanism: Symbol = (required),
    initial_response: Option<Vec<u8>> = (optional),
    hostname: Option<String> = (optional),
}

/// 5.3.4 SASL Challenge: a mechanism-specific challenge from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaslChallenge {
    /// The mechanism-specific challenge data.
    pub challenge: Vec<u8>,
}

composite_schema! {
    struct SaslChallenge, code = 0x42;
    challenge: Vec<u8> = (required),
}

/// 5.3.5 SASL Response: a mechanism-specific response to a challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaslResponse {
    /// The mechanism-specific response data.
    pub response: Vec<u8>,
}

composite_schema! {
    struct SaslResponse, code = 0x43;
    response: Vec<u8> = (required),
}

/// 5.3.6 SASL Outcome: concludes the SASL negotiation with its final result.
#[derive(Debug, Clone, PartialEq)]
pub struct SaslOutcome {
    /// The outcome of the SASL dialog.
    pub code: SaslCode,
    /// Additional data, defined by the negotiated mechanism, to be processed by the
    /// application's security layer.
    pub additional_data: Option<Vec<u8>>,
}

composite_schema! {
    struct SaslOutcome, code = 0x44;
    code: SaslCode = (required),
    additional_data: Option<Vec<u8>> = (optional),
}

/// 5.3.6 SASL Code: the result of a SASL negotiation.
///
/// Encodes as a single `ubyte`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaslCode {
    /// Negotiation was successful and authentication has completed.
    Ok,
    /// Negotiation failed due to the sending peer's inability to authenticate.
    Auth,
    /// Negotiation failed due to a systemic problem unrelated to authentication.
    Sys,
    /// As with `Sys`, but the server is unwilling to accept further connections.
    SysPerm,
    /// As with `Sys`, but the server is unable to accept connections at this time.
    SysTemp,
}

impl Marshal for SaslCode {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        let code: u8 = match self {
            SaslCode::Ok => 0,
            SaslCode::Auth => 1,
            SaslCode::Sys => 2,
            SaslCode::SysPerm => 3,
            SaslCode::SysTemp => 4,
        };
        code.marshal(w)
    }
}

impl Unmarshal for SaslCode {
    fn unmarshal<R: Read>(r: &mut R) -> Result<Self> {
        match u8::unmarshal(r)? {
            0 => Ok(SaslCode::Ok),
            1 => Ok(SaslCode::Auth),
            2 => Ok(SaslCode::Sys),
            3 => Ok(SaslCode::SysPerm),
            4 => Ok(SaslCode::SysTemp),
            other => Err(Error::Message(format!("invalid sasl-code {other}"))),
        }
    }
}
