use super::codec;
use ec2_dns_application::RespondToQueryUseCase;
use hickory_proto::op::{MessageType, OpCode, ResponseCode};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Answers every request `ServerFuture` hands over, on UDP and TCP alike.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<RespondToQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<RespondToQueryUseCase>) -> Self {
        Self { use_case }
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let client = request.src();

        if request.message_type() != MessageType::Query {
            warn!(client = %client, id = request.id(), "Got a response as a request");
            return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                .await;
        }

        if request.op_code() != OpCode::Query {
            warn!(client = %client, op_code = ?request.op_code(), "Unsupported opcode");
            return send_error_response(request, &mut response_handle, ResponseCode::NotImp)
                .await;
        }

        let question = match request.queries() {
            [query] => query.original(),
            queries => {
                warn!(client = %client, count = queries.len(), "Expected exactly one question");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        let dns_request = codec::to_domain_request(request.header(), question);
        info!(
            name = %dns_request.query.name,
            record_type = %dns_request.query.record_type,
            class = %dns_request.query.record_class,
            client = %client,
            transport = %request.protocol(),
            "DNS query received"
        );

        let response = self.use_case.execute(&dns_request);

        let answers = match codec::answer_records(&response) {
            Ok(answers) => answers,
            Err(e) => {
                error!(name = %dns_request.query.name, error = %e, "Failed to build answer");
                return send_error_response(request, &mut response_handle, ResponseCode::ServFail)
                    .await;
            }
        };

        debug!(
            name = %dns_request.query.name,
            rcode = %response.response_code,
            answers = answers.len(),
            "Sending response"
        );

        let header = codec::response_header(request.header(), &response);
        let builder = MessageResponseBuilder::from_message_request(request);
        let message = builder.build(header, answers.iter(), &[], &[], &[]);

        match response_handle.send_response(message).await {
            Ok(info) => info,
            Err(e) => {
                error!(client = %client, error = %e, "Failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let response = builder.error_msg(request.header(), code);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
