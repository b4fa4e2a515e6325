#![allow(dead_code)]
use ec2_dns_application::{HostnameMatcher, RespondToQueryUseCase};
use ec2_dns_domain::DomainError;
use ec2_dns_infrastructure::dns::{DnsListeners, DnsServerHandler};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, UdpSocket};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

pub const IDLE_TIMEOUT: Duration = Duration::from_secs(5);
pub const IO_TIMEOUT: Duration = Duration::from_secs(5);

pub fn handler() -> DnsServerHandler {
    let matcher = Arc::new(HostnameMatcher::new().unwrap());
    DnsServerHandler::new(Arc::new(RespondToQueryUseCase::new(matcher)))
}

pub struct QueryMessageBuilder {
    id: u16,
    names: Vec<String>,
    record_type: RecordType,
    class: DNSClass,
    message_type: MessageType,
    op_code: OpCode,
    recursion_desired: bool,
    checking_disabled: bool,
}

impl QueryMessageBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            id: 4242,
            names: vec![name.to_string()],
            record_type: RecordType::A,
            class: DNSClass::IN,
            message_type: MessageType::Query,
            op_code: OpCode::Query,
            recursion_desired: true,
            checking_disabled: false,
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn class(mut self, class: DNSClass) -> Self {
        self.class = class;
        self
    }

    pub fn message_type(mut self, message_type: MessageType) -> Self {
        self.message_type = message_type;
        self
    }

    pub fn op_code(mut self, op_code: OpCode) -> Self {
        self.op_code = op_code;
        self
    }

    pub fn recursion_desired(mut self, recursion_desired: bool) -> Self {
        self.recursion_desired = recursion_desired;
        self
    }

    pub fn checking_disabled(mut self, checking_disabled: bool) -> Self {
        self.checking_disabled = checking_disabled;
        self
    }

    pub fn extra_question(mut self, name: &str) -> Self {
        self.names.push(name.to_string());
        self
    }

    pub fn without_question(mut self) -> Self {
        self.names.clear();
        self
    }

    pub fn build_message(self) -> Message {
        let mut message = Message::new();
        message
            .set_id(self.id)
            .set_message_type(self.message_type)
            .set_op_code(self.op_code)
            .set_recursion_desired(self.recursion_desired)
            .set_checking_disabled(self.checking_disabled);

        for name in &self.names {
            let mut query = Query::query(Name::from_ascii(name).unwrap(), self.record_type);
            query.set_query_class(self.class);
            message.add_query(query);
        }

        message
    }

    pub fn build(self) -> Vec<u8> {
        self.build_message().to_vec().unwrap()
    }
}

pub fn parse(bytes: &[u8]) -> Message {
    Message::from_vec(bytes).expect("response must be a valid DNS message")
}

/// The A record data is the last four bytes of a reply with one answer and no
/// additional records.
pub fn trailing_ipv4(bytes: &[u8]) -> [u8; 4] {
    let tail = &bytes[bytes.len() - 4..];
    [tail[0], tail[1], tail[2], tail[3]]
}

// ── loopback server ────────────────────────────────────────────────────────

pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: CancellationToken,
    handle: JoinHandle<Result<(), DomainError>>,
}

impl TestServer {
    pub async fn start() -> Self {
        Self::start_with_idle_timeout(IDLE_TIMEOUT).await
    }

    pub async fn start_with_idle_timeout(idle_timeout: Duration) -> Self {
        let listeners = DnsListeners::bind("127.0.0.1:0".parse().unwrap(), handler(), idle_timeout)
            .await
            .expect("failed to bind test listeners");
        let addr = listeners.udp_addr().unwrap();
        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(listeners.run(shutdown.clone()));
        Self {
            addr,
            shutdown,
            handle,
        }
    }

    pub async fn stop(self) -> Result<(), DomainError> {
        self.shutdown.cancel();
        tokio::time::timeout(IO_TIMEOUT, self.handle)
            .await
            .expect("listeners did not stop after cancellation")
            .expect("listener task panicked")
    }
}

pub async fn udp_exchange(server: SocketAddr, query: &[u8]) -> Vec<u8> {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    socket.send_to(query, server).await.unwrap();
    let mut buf = vec![0u8; 4096];
    let (len, _) = tokio::time::timeout(IO_TIMEOUT, socket.recv_from(&mut buf))
        .await
        .expect("timed out waiting for UDP response")
        .unwrap();
    buf.truncate(len);
    buf
}

pub async fn tcp_send(stream: &mut TcpStream, query: &[u8]) {
    stream
        .write_all(&(query.len() as u16).to_be_bytes())
        .await
        .unwrap();
    stream.write_all(query).await.unwrap();
}

pub async fn tcp_recv(stream: &mut TcpStream) -> Vec<u8> {
    let mut len_buf = [0u8; 2];
    tokio::time::timeout(IO_TIMEOUT, stream.read_exact(&mut len_buf))
        .await
        .expect("timed out waiting for TCP response")
        .unwrap();
    let mut buf = vec![0u8; u16::from_be_bytes(len_buf) as usize];
    stream.read_exact(&mut buf).await.unwrap();
    buf
}
