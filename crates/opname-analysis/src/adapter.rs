//! Gemini 分析適配器
//!
//! 以 REST 呼叫 Google Gemini generateContent 端點。呼叫端永遠
//! 取得可顯示的文字：未設定金鑰、無差異、呼叫進行中或失敗時
//! 回傳對應的固定印尼文訊息。

use std::sync::atomic::{AtomicBool, Ordering};

use opname_audit::OpnameReport;

use crate::prompt;

/// 未設定 API 金鑰時的訊息
pub const MSG_DISABLED: &str = "Analisis AI tidak tersedia. Kunci API Google Gemini belum diatur.";

/// 報告沒有差異時的訊息
pub const MSG_NO_DISCREPANCY: &str =
    "Tidak ada selisih stok yang signifikan untuk dianalisis. Semua stok cocok!";

/// 呼叫失敗時的訊息
pub const MSG_FAILED: &str = "Gagal mendapatkan analisis dari AI. Silakan coba lagi nanti.";

/// 前一次分析尚未完成時的訊息
pub const MSG_BUSY: &str = "Analisis sebelumnya masih diproses. Mohon tunggu sebentar.";

const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-04-17";
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// API 金鑰環境變數名稱
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// 分析後端配置
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Gemini API 金鑰，`None` 時分析停用
    pub api_key: Option<String>,

    /// 模型名稱
    pub model: String,

    /// API 基底位址（測試時可指向本地）
    pub endpoint: String,
}

impl AnalysisConfig {
    /// 創建配置
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// 從環境變數讀取金鑰（空白值視為未設定）
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self::new(api_key)
    }

    /// 建構器模式：設置模型名稱
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// 建構器模式：設置 API 基底位址
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[derive(Debug, thiserror::Error)]
enum GenerateError {
    #[error("HTTP 請求失敗: {0}")]
    Http(#[from] reqwest::Error),

    #[error("回應中沒有生成文字")]
    MissingText,
}

/// Gemini 分析客戶端
///
/// 同一時間至多一個進行中的呼叫，重入時直接回覆忙碌訊息。
#[derive(Debug)]
pub struct AnalysisClient {
    config: AnalysisConfig,
    http: reqwest::Client,
    in_flight: AtomicBool,
}

impl AnalysisClient {
    /// 創建客戶端
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            in_flight: AtomicBool::new(false),
        }
    }

    /// 分析盤點報告的差異，回傳可顯示的印尼文文字
    ///
    /// 判定順序：先檢查是否有差異，再檢查金鑰與忙碌狀態。
    /// 沒有差異的報告不需要金鑰即可得到結論。
    pub async fn analyze(&self, report: &OpnameReport) -> String {
        let discrepancies = prompt::collect_discrepancies(report);
        if discrepancies.is_empty() {
            return MSG_NO_DISCREPANCY.to_string();
        }

        let Some(api_key) = self.config.api_key.as_deref() else {
            tracing::warn!("未設定 {API_KEY_ENV}，AI 分析停用");
            return MSG_DISABLED.to_string();
        };

        if self.in_flight.swap(true, Ordering::SeqCst) {
            return MSG_BUSY.to_string();
        }

        let prompt_text = prompt::build_prompt(&report.store_name, &discrepancies);
        tracing::debug!(
            "送出分析請求: {}，{} 筆差異",
            report.store_name,
            discrepancies.len()
        );
        let result = self.generate(api_key, &prompt_text).await;
        self.in_flight.store(false, Ordering::SeqCst);

        match result {
            Ok(answer) => answer,
            Err(err) => {
                tracing::warn!("Gemini 呼叫失敗: {err}");
                MSG_FAILED.to_string()
            }
        }
    }

    async fn generate(&self, api_key: &str, prompt_text: &str) -> Result<String, GenerateError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.endpoint, self.config.model
        );
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt_text }] }]
        });

        let response = self
            .http
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: serde_json::Value = response.json().await?;
        payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or(GenerateError::MissingText)
    }
}
