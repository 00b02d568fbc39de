use proxyload::error::AppResult;

fn main() -> AppResult<()> {
    proxyload::entry::run()
}
