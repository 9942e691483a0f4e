//! Core data models for jasmim.
//!
//! These types are shared across all jasmim crates and represent the
//! analysis request surface and the structured verdict returned by the
//! vision model.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// =============================================================================
// ANALYSIS MODE
// =============================================================================

/// The two supported analysis intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    /// Problem diagnosis: identify, assess, and diagnose if a problem is visible.
    Diagnostico,
    /// Identification and care: identify and produce a care plan.
    Identificacao,
}

impl AnalysisType {
    /// Human-readable label, as presented to the model inside the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisType::Diagnostico => "Diagnóstico de Problema",
            AnalysisType::Identificacao => "Identificação e Cuidados",
        }
    }
}

// =============================================================================
// ANALYSIS RESULT
// =============================================================================

/// Plant identification block. Always present in a valid reply.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Identificacao {
    pub nome_popular: String,
    pub nome_cientifico: String,
    pub descricao: String,
}

/// Overall health verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum HealthStatus {
    #[serde(rename = "Saudável")]
    Saudavel,
    #[serde(rename = "Com Problemas")]
    ComProblemas,
}

/// General health assessment block. Always present in a valid reply.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Saude {
    pub status: HealthStatus,
    pub observacao: String,
}

/// Problem diagnosis block. Present only when the model found a problem
/// and the request asked for diagnosis.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Diagnostico {
    pub problema: String,
    pub causa_provavel: String,
    pub sintomas_visiveis: String,
}

/// One titled instruction block within the action plan.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PassoDeAcao {
    pub titulo: String,
    pub instrucao: String,
}

/// Care or treatment plan. Always present in a valid reply.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanoDeAcao {
    pub titulo: String,
    pub passos: Vec<PassoDeAcao>,
}

/// Complete structured verdict produced by the vision model.
///
/// `diagnostico` is conditional: the model includes it only when the health
/// status is "Com Problemas" and the diagnostic mode was requested. The key
/// is omitted from serialized output when absent.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlantAnalysis {
    pub identificacao: Identificacao,
    pub saude: Saude,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostico: Option<Diagnostico>,
    pub plano_de_acao: PlanoDeAcao,
    pub disclaimer: String,
}

impl PlantAnalysis {
    /// Parse a raw model reply into the typed schema.
    ///
    /// The reply is untrusted free text until this succeeds. Malformed JSON
    /// and JSON missing required keys are both contract failures of the
    /// model client and map to [`Error::InvalidReply`]; no partial repair or
    /// fallback extraction is attempted.
    pub fn from_reply(reply: &str) -> Result<Self> {
        serde_json::from_str(reply).map_err(|e| Error::InvalidReply(e.to_string()))
    }
}
