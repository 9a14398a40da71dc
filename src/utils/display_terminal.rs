//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 시 바인딩 주소와 등록된 엔드포인트를 시각적으로 출력합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// # Examples
///
/// ```rust,ignore
/// use crate::utils::display_terminal::print_boxed_title;
///
/// print_boxed_title("OAuth Exchange Service");
/// ```
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║              OAuth Exchange Service              ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

fn boxed_title(title: &str) -> String {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    format!("╔{}╗\n║{:^50}║\n╚{}╝", border, title, border)
}

/// 엔드포인트 한 줄을 출력합니다
///
/// Output:
/// ```text
///    ├─ POST /api/v1/auth/github/exchange
/// ```
pub fn print_route(method: &str, path: &str) {
    println!("{}", route_line(method, path));
}

fn route_line(method: &str, path: &str) -> String {
    format!("   ├─ {:<6} {}", method, path)
}

/// 시작 요약을 출력합니다
pub fn print_startup_summary(bind_address: &str, routes: &[(&str, &str)]) {
    println!();
    print_boxed_title("🚀 OAUTH EXCHANGE SERVICE");
    println!("   🌐 Listening on http://{}", bind_address);
    for (method, path) in routes {
        print_route(method, path);
    }
    println!();
}
