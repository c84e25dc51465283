//! Explanations of the error codes the face service reports.
//!
//! The texts are the ones the service documents for each code.

/// The explanation used for the codes that are not in the catalog.
pub const UNKNOWN_ERROR: &str = "unknown error";

/// The code of a successful call.
pub const SUCCESS: i64 = 0;

/// The search found nobody in the group.
pub const MATCH_USER_NOT_FOUND: i64 = 222207;

/// Look up the explanation of an error code.
pub fn explain(code: i64) -> Option<&'static str> {
    let explanation = match code {
        4 => "集群超限额",
        6 => "没有接口权限",
        14 => "IAM鉴权失败",
        17 => "每天请求量超限额",
        18 => "QPS超限额",
        19 => "请求总量超限额",
        100 => "无效的access_token参数",
        110 => "Access Token失效",
        111 => "Access token过期",
        222001 => "必要参数未传入",
        222201 => "服务端请求失败",
        222202 => "图片中没有人脸",
        222203 => "无法解析人脸",
        222204 => "从图片的url下载图片失败",
        222207 => "未找到匹配的用户",
        222209 => "face_token不存在",
        222901..=222999 => "服务端请求失败",
        223105 => "该人脸已存在",
        223106 => "该人脸不存在",
        223113 => "人脸有被遮挡",
        223114 => "人脸模糊",
        223115 => "人脸光照不好",
        223116 => "人脸不完整",
        223120 => "活体检测未通过",
        _ => return None,
    };
    Some(explanation)
}

/// Look up the explanation of an error code, falling back to [`UNKNOWN_ERROR`].
pub fn explain_or_unknown(code: i64) -> &'static str {
    explain(code).unwrap_or(UNKNOWN_ERROR)
}
