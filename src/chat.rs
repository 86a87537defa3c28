use anyhow::Result;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::warn;

const CHAT_URL: &str = "https://text.pollinations.ai/";

/// Free backends tried in priority order; the next one is attempted only
/// after the previous fails or returns an empty body.
const FREE_MODELS: &[&str] = &["openai", "qwen", "mistral", "llama"];

/// Returned once every backend has been exhausted.
const ALL_BUSY_REPLY: &str = "Ôi, mạng vũ trụ đang kẹt xe quá! Cậu chờ xíu rồi hỏi lại tớ nha 🍊💦";

// Capy persona for primary-school learners (grades 1-5).
const SYSTEM_PROMPT: &str = "\
Bạn là \"Capy Thông Thái\", một chú chuột lang nước (Capybara) siêu dễ thương, đeo kính cận, \
là bạn học tập của các bạn học sinh Tiểu học (Lớp 1 đến Lớp 5).

QUY TẮC BẮT BUỘC:
1. Đối tượng là trẻ em 6-11 tuổi: ngôn ngữ đơn giản, trong sáng, câu ngắn gọn. \
Tránh từ Hán Việt khó và từ chuyên ngành.
2. Xưng \"Tớ\" - gọi \"Cậu\" hoặc \"Bạn nhỏ\". Luôn vui vẻ, khen ngợi, động viên. \
Dùng nhiều emoji sinh động (🍊, 🌿, ✨, 🐹, 🎒, 📚, ✏️).
3. Với Toán/Tiếng Việt/Tiếng Anh: KHÔNG đưa đáp án ngay. Gợi ý phương pháp và ví dụ \
tương tự để bé tự tìm ra đáp án. Với câu hỏi khoa học: giải thích bằng hình ảnh so sánh gần gũi.
4. Tuyệt đối không đề cập bạo lực, kinh dị hay chủ đề người lớn; nếu gặp câu hỏi \
không phù hợp, khéo léo chuyển sang chuyện vui khác.
5. Sở thích: đội quả cam lên đầu, ngâm suối nước nóng, ăn dưa hấu đỏ.";

/// One-shot chat turn with sequential model fallback.
///
/// Only the current message is sent (no history) to keep the context
/// small enough for the free backends. Exhausting the list yields a
/// user-safe reply instead of an error.
pub async fn send_message(client: &Client, message: &str) -> String {
    for model in FREE_MODELS {
        match try_model(client, model, message).await {
            Ok(reply) => return reply,
            Err(e) => warn!("Model {} failed: {}", model, e),
        }
    }
    ALL_BUSY_REPLY.to_string()
}

async fn try_model(client: &Client, model: &str, message: &str) -> Result<String> {
    let response = client
        .post(CHAT_URL)
        .json(&build_payload(model, message))
        .send()
        .await?;

    if !response.status().is_success() {
        anyhow::bail!("HTTP {}", response.status());
    }

    let text = response.text().await?;
    if text.trim().is_empty() {
        anyhow::bail!("empty response");
    }
    Ok(text)
}

fn build_payload(model: &str, message: &str) -> Value {
    json!({
        "messages": [
            { "role": "system", "content": SYSTEM_PROMPT },
            { "role": "user", "content": message }
        ],
        "model": model,
        // Fixed seed keeps the persona stable between turns.
        "seed": 42,
        "jsonMode": false
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_one_shot_with_persona() {
        let payload = build_payload("openai", "1 + 1 bằng mấy?");
        assert_eq!(payload["model"], "openai");
        assert_eq!(payload["seed"], 42);
        let messages = payload["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "1 + 1 bằng mấy?");
    }

    #[test]
    fn model_order_prefers_openai_first() {
        assert_eq!(FREE_MODELS.first(), Some(&"openai"));
        assert_eq!(FREE_MODELS.len(), 4);
    }
}
