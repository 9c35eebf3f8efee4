use serde::{Deserialize, Deserializer};
use std::fmt;

/// Treats an explicit JSON `null` the same as a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal,)* }
    ) => {
        $(#[$meta])*
        ///
        /// Labels outside the known set are kept verbatim in `Other`.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            $($variant,)*
            #[default]
            Unknown,
            Other(String),
        }

        impl $name {
            pub fn from_label(label: &str) -> Self {
                match label {
                    $($label => $name::$variant,)*
                    "UNKNOWN" => $name::Unknown,
                    other => $name::Other(other.to_string()),
                }
            }

            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $label,)*
                    $name::Unknown => "UNKNOWN",
                    $name::Other(label) => label,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let label = String::deserialize(deserializer)?;
                Ok(Self::from_label(&label))
            }
        }
    };
}

labelled_enum! {
    /// Kind of a class as classified by the analyzer.
    ClassType {
        Controller => "CONTROLLER",
        Service => "SERVICE",
        Repository => "REPOSITORY",
        Component => "COMPONENT",
        Configuration => "CONFIGURATION",
        Interface => "INTERFACE",
        PlainClass => "PLAIN_CLASS",
        DubboService => "DUBBO_SERVICE",
    }
}

labelled_enum! {
    /// How one method reaches another.
    CallType {
        InternalMethodCall => "INTERNAL_METHOD_CALL",
        RpcMethodCall => "RPC_METHOD_CALL",
        HttpMethodCall => "HTTP_METHOD_CALL",
        StaticMethodCall => "STATIC_METHOD_CALL",
        ConstructorCall => "CONSTRUCTOR_CALL",
    }
}

/// Header block written by the analyzer alongside the records.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    #[serde(default, deserialize_with = "nullable")]
    pub analysis_time: String,
    #[serde(default, deserialize_with = "nullable")]
    pub project_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub artifact_id: String,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub base_package: Option<String>,
    #[serde(default)]
    pub root_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub class_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub qualified_name: String,
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub class_type: ClassType,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub package_name: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub annotations: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub method_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub signature: String,
    #[serde(default)]
    pub class_id: Option<String>,
    #[serde(default)]
    pub return_type: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub line_start: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub line_end: u32,
}

/// A resolved or unresolved call edge between two methods.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodCall {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub source_method_id: String,
    /// `None` for calls into code outside the analyzed services.
    #[serde(default)]
    pub target_method_id: Option<String>,
    #[serde(default)]
    pub target_qualified_method: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub call_type: CallType,
    #[serde(default, deserialize_with = "nullable")]
    pub source_line_number: u32,
    #[serde(default)]
    pub caller_expression: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub cross_service: bool,
    #[serde(default)]
    pub target_service: Option<String>,
}

impl MethodCall {
    /// Target id when the analyzer resolved the callee to a known method.
    pub fn resolved_target(&self) -> Option<&str> {
        self.target_method_id
            .as_deref()
            .filter(|target| !target.is_empty())
    }
}

/// One step of a call chain. Also used for the chain's entry point.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainNode {
    #[serde(default, deserialize_with = "nullable")]
    pub level: usize,
    #[serde(default, deserialize_with = "nullable")]
    pub method_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub class_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub service_id: String,
    #[serde(default)]
    pub call_type: Option<CallType>,
    #[serde(default)]
    pub http_endpoint: Option<String>,
}

impl ChainNode {
    pub fn endpoint(&self) -> Option<&str> {
        self.http_endpoint
            .as_deref()
            .filter(|endpoint| !endpoint.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallChain {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default)]
    pub entry_point: Option<ChainNode>,
    #[serde(default, deserialize_with = "nullable")]
    pub chain: Vec<ChainNode>,
    #[serde(default, deserialize_with = "nullable")]
    pub max_depth: usize,
    #[serde(default, deserialize_with = "nullable")]
    pub involved_services: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub cross_service: bool,
}

/// Complete analysis result as written by the call-chain analyzer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDocument {
    #[serde(default)]
    pub metadata: Option<AnalysisMetadata>,
    #[serde(default, deserialize_with = "nullable")]
    pub services: Vec<Service>,
    #[serde(default, deserialize_with = "nullable")]
    pub classes: Vec<ClassRecord>,
    #[serde(default, deserialize_with = "nullable")]
    pub methods: Vec<Method>,
    #[serde(default, deserialize_with = "nullable")]
    pub method_calls: Vec<MethodCall>,
    #[serde(default, deserialize_with = "nullable")]
    pub call_chains: Vec<CallChain>,
}

impl AnalysisDocument {
    pub fn resolved_call_count(&self) -> usize {
        self.method_calls
            .iter()
            .filter(|call| call.resolved_target().is_some())
            .count()
    }
}
