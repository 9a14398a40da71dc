//! # UI Components
//!
//! 서버 렌더링용 소형 UI 컴포넌트입니다.
//!
//! - [`select`] - 색상 토큰 기반 스타일 셀렉트와 정적 스타일시트

pub mod select;

pub use select::{render_select, resolve_color, SelectOption, SelectProps, SELECT_STYLESHEET};
