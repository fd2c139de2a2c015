use tfs_lsp::TfsLanguageServer;
use tokio::io::{stdin, stdout};
use tower_lsp::{LspService, Server};

#[tokio::main]
async fn main() {
    let stdin = stdin();
    let stdout = stdout();
    let (service, socket) = LspService::build(TfsLanguageServer::new)
        .custom_method("tfs/decorations", TfsLanguageServer::decorations)
        .finish();
    Server::new(stdin, stdout, socket).serve(service).await;
}
