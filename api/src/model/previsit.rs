use derive_new::new;
use serde::Serialize;

// 사전답사 존재 여부의 응답. 없는 것도 정상 결과이므로 404 가 아니라 false 를 내려준다
#[derive(Debug, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct PrevisitExistsResponse {
    pub exists: bool,
}
