//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum used across the client.

use serde::Serialize;

/// エラー種別の列挙体
///
/// クライアント全体で使用するエラー分類を定義します。
/// サーバーと違い HTTP ステータスを返す立場ではないため、
/// 「ユーザーに見せるもの」と「ログに落とすもの」の区別が中心です。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::Validation;
/// assert_eq!(kind.as_str(), "Validation");
/// assert!(kind.is_user_error());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 入力値の検証エラー（フォーム入力など、ユーザーが直せるもの）
    Validation,
    /// 未認証（ログイン・検証コードの失敗を含む）
    Unauthorized,
    /// 権限なし（ロール不一致でのアクセス拒否）
    Forbidden,
    /// 対象が存在しない
    NotFound,
    /// 現在の状態と競合（多重送信など）
    Conflict,
    /// 外部 API 連携の失敗（原則として空結果に吸収される）
    Integration,
    /// ローカル永続化（セッションストア）の失敗
    Storage,
    /// クライアント内部の不整合
    Internal,
}

impl ErrorKind {
    /// ユーザー向けの文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::Unauthorized.as_str(), "Unauthorized");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "Validation",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::Integration => "Integration",
            ErrorKind::Storage => "Storage",
            ErrorKind::Internal => "Internal",
        }
    }

    /// ユーザー操作で解消できるエラーかどうかを判定
    ///
    /// `true` のエラーはインラインメッセージとして表示し、
    /// ログには debug レベルで残す程度にとどめます。
    #[inline]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            ErrorKind::Validation
                | ErrorKind::Unauthorized
                | ErrorKind::Forbidden
                | ErrorKind::NotFound
                | ErrorKind::Conflict
        )
    }

    /// クライアント実装側の問題かどうかを判定
    ///
    /// `true` のエラーは error レベルでログに記録すべきです。
    #[inline]
    pub const fn is_internal(&self) -> bool {
        matches!(self, ErrorKind::Storage | ErrorKind::Internal)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
