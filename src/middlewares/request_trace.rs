/*!
 * 请求追踪中间件
 *
 * 为每个请求分配一个 UUID 请求 ID，在 `info_span!` 中执行后续处理，
 * 并通过 `X-Request-Id` 响应头回传给调用方。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * App::new()
 *     .wrap(RequestTrace)
 *     .service(web::scope("/api").configure(configure_classes_routes))
 * ```
 *
 * 处理程序中可以通过 `RequestTrace::request_id(&req)` 取出请求 ID，
 * 记录存储层错误时带上它便于关联日志。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpRequest,
    dev::{ServiceRequest, ServiceResponse},
    http::header::{HeaderName, HeaderValue},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use std::time::Instant;
use tracing::{Instrument, debug, info_span};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 请求 ID，保存在请求扩展中
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

#[derive(Clone)]
pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequestTraceMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let request_id = Uuid::new_v4().to_string();
        let span = info_span!(
            "request",
            method = %req.method(),
            path = %req.path(),
            request_id = %request_id,
        );

        req.extensions_mut().insert(RequestId(request_id.clone()));

        Box::pin(
            async move {
                let started = Instant::now();
                let mut res = srv.call(req).await?;

                if let Ok(value) = HeaderValue::from_str(&request_id) {
                    res.headers_mut()
                        .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
                }

                debug!(
                    status = res.status().as_u16(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "request finished"
                );
                Ok(res)
            }
            .instrument(span),
        )
    }
}

impl RequestTrace {
    /// 从请求扩展中取出请求 ID，未经过中间件时返回 "-"
    pub fn request_id(req: &HttpRequest) -> String {
        req.extensions()
            .get::<RequestId>()
            .map(|id| id.0.clone())
            .unwrap_or_else(|| "-".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test, web};

    async fn echo_id(req: HttpRequest) -> HttpResponse {
        HttpResponse::Ok().body(RequestTrace::request_id(&req))
    }

    #[actix_web::test]
    async fn test_request_id_header_matches_extension() {
        let app = test::init_service(
            App::new()
                .wrap(RequestTrace)
                .route("/", web::get().to(echo_id)),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let header = res
            .headers()
            .get(REQUEST_ID_HEADER)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let body = test::read_body(res).await;

        assert_eq!(body.as_ref(), header.as_bytes());
        assert!(Uuid::parse_str(&header).is_ok());
    }

    #[actix_web::test]
    async fn test_request_id_without_middleware() {
        let req = test::TestRequest::default().to_http_request();
        assert_eq!(RequestTrace::request_id(&req), "-");
    }
}
