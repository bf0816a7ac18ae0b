//! Mentoring prompt and the fallback message used when no model is configured.

/// Two-line coaching message returned when no model provider is configured.
pub const DEFAULT_FEEDBACK: &str = "코드 목적을 한 문장으로 설명해보세요.\n경계값(빈 입력/0/음수) 처리와 간단한 테스트 2~3개를 추가해보세요.";

const INSTRUCTIONS: [&str; 7] = [
    "당신은 초보 친화형 코딩 멘토입니다.",
    "아래 학생 코드를 보고 4~6줄로 간단히 피드백하세요:",
    "- 잘한 점 1~2개",
    "- 부족한 점/버그 가능성",
    "- 개선 포인트(가독성/함수 분리/에러 처리/테스트 제안 중 2~3개)",
    "",
    "학생 코드:",
];

/// Builds the prompt sent to the model, with `code` embedded verbatim in a fenced block.
pub fn mentoring_prompt(code: &str) -> String {
    let mut lines: Vec<&str> = INSTRUCTIONS.to_vec();
    lines.extend(["```", code, "```"]);
    lines.join("\n")
}
