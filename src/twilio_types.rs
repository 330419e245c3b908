mod twiml {
    use xmlserde_derives::XmlSerialize;

    #[derive(PartialEq, Eq, XmlSerialize, Default)]
    #[xmlserde(root = b"Response")]
    pub struct Response {
        #[xmlserde(ty = "untag")]
        pub actions: Vec<ResponseAction>,
    }

    #[derive(PartialEq, Eq, XmlSerialize)]
    pub enum ResponseAction {
        #[xmlserde(name = b"Say")]
        Say(SayAction),
    }

    #[derive(PartialEq, Eq, XmlSerialize, Default)]
    pub struct SayAction {
        #[xmlserde(ty = "text")]
        pub text: String,
        #[xmlserde(name = b"voice", ty = "attr")]
        pub voice: Option<String>,
        #[xmlserde(name = b"language", ty = "attr")]
        pub language: Option<String>,
    }
}
pub use twiml::*;

mod request {
    use crate::utils::{lenient_confidence, lenient_number};
    use serde::Deserialize;

    /// Parameters Twilio sends with every webhook, whatever the product.
    #[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
    #[serde(rename_all = "PascalCase")]
    pub struct TwilioRequest {
        pub account_sid: Option<String>,
        pub from: Option<String>,
        pub to: Option<String>,
        pub from_city: Option<String>,
        pub from_state: Option<String>,
        pub from_zip: Option<String>,
        pub from_country: Option<String>,
        pub to_city: Option<String>,
        pub to_state: Option<String>,
        pub to_zip: Option<String>,
        pub to_country: Option<String>,
    }

    /// Parameters of one voice webhook delivery.
    ///
    /// Different call events populate different subsets, so every field is optional and nothing
    /// ties the groups together. Enum-like values are kept as the raw strings Twilio sent and
    /// can be parsed with [`CallStatus`](super::CallStatus) and the other status types.
    ///
    /// <https://www.twilio.com/docs/usage/webhooks/voice-webhooks>
    #[derive(Deserialize, Debug, Clone, Default, PartialEq)]
    #[serde(rename_all = "PascalCase")]
    pub struct VoiceRequest {
        #[serde(flatten)]
        pub base: TwilioRequest,

        pub call_sid: Option<String>,
        /// queued, ringing, in-progress, completed, busy, failed or no-answer
        pub call_status: Option<String>,
        pub api_version: Option<String>,
        /// inbound, or outbound-dial when the leg was created by Dial
        pub direction: Option<String>,
        /// Only set for forwarded calls, and only by carriers that pass it along.
        pub forwarded_from: Option<String>,
        /// Set when caller id lookup is enabled on the called number.
        pub caller_name: Option<String>,
        /// Absent on the first leg of a call.
        pub parent_call_sid: Option<String>,
        pub call_token: Option<String>,

        // Gather & Record
        /// Gathered digits without the finish key, or for Record the key that ended the
        /// recording ('hangup' if the caller hung up).
        pub digits: Option<String>,
        pub speech_result: Option<String>,
        /// 0.0 to 1.0. Unparseable or out of range values bind as `None`.
        #[serde(default, deserialize_with = "lenient_confidence")]
        pub confidence: Option<f32>,
        pub recording_url: Option<String>,
        pub recording_status: Option<String>,
        /// Seconds, kept as text.
        pub recording_duration: Option<String>,
        #[serde(default, deserialize_with = "lenient_number")]
        pub recording_channels: Option<i32>,
        pub recording_source: Option<String>,
        pub finished_on_key: Option<String>,

        // Transcription
        pub transcription_sid: Option<String>,
        pub transcription_text: Option<String>,
        pub transcription_status: Option<String>,
        pub transcription_url: Option<String>,
        pub recording_sid: Option<String>,

        // Dial
        pub dial_call_status: Option<String>,
        /// Not sent after dialing a conference.
        pub dial_call_sid: Option<String>,
        /// Seconds, kept as text. Not sent after dialing a conference.
        pub dial_call_duration: Option<String>,

        // SIP
        pub sip_domain: Option<String>,
        pub sip_username: Option<String>,
        pub sip_call_id: Option<String>,
        pub sip_source_ip: Option<String>,
    }
}
pub use request::*;

mod status {
    use serde::de::{value, IntoDeserializer};
    use serde::{Deserialize, Serialize};
    use std::fmt;
    use std::str::FromStr;

    /// A webhook value outside the documented set for its field.
    #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
    #[error("unrecognized {field} value {value:?}")]
    pub struct UnknownValue {
        pub field: &'static str,
        pub value: String,
    }

    /// Parses and prints the serde (kebab-case) spelling of a status enum.
    macro_rules! wire_str {
        ($name:ident, $field:literal) => {
            impl FromStr for $name {
                type Err = UnknownValue;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    let de: value::StrDeserializer<value::Error> = s.into_deserializer();
                    Self::deserialize(de).map_err(|_| UnknownValue {
                        field: $field,
                        value: s.to_string(),
                    })
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    self.serialize(f)
                }
            }
        };
    }

    #[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[serde(rename_all = "kebab-case")]
    pub enum CallStatus {
        Queued,
        Ringing,
        InProgress,
        Completed,
        Busy,
        Failed,
        NoAnswer,
    }
    wire_str!(CallStatus, "CallStatus");

    #[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[serde(rename_all = "kebab-case")]
    pub enum CallDirection {
        Inbound,
        OutboundApi,
        OutboundDial,
    }
    wire_str!(CallDirection, "Direction");

    #[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[serde(rename_all = "kebab-case")]
    pub enum RecordingStatus {
        Completed,
        Failed,
    }
    wire_str!(RecordingStatus, "RecordingStatus");

    #[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[serde(rename_all = "kebab-case")]
    pub enum TranscriptionStatus {
        Completed,
        Failed,
    }
    wire_str!(TranscriptionStatus, "TranscriptionStatus");

    /// Outcome of a Dial verb, reported to its action URL.
    #[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[serde(rename_all = "kebab-case")]
    pub enum DialCallStatus {
        Completed,
        Answered,
        Busy,
        NoAnswer,
        Failed,
        Canceled,
    }
    wire_str!(DialCallStatus, "DialCallStatus");
}
pub use status::*;
